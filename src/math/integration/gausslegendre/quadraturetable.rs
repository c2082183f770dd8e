use std::fs::File;
use std::io::{
    self,
    BufRead,
    BufReader
};
use std::path::{
    Path,
    PathBuf
};

use log::{
    debug,
    info,
    warn
};
use thiserror::Error;

use crate::math::integration::gausslegendre::quadraturepoint::{
    ParseQuadraturePointError,
    QuadraturePoint
};

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureTableError
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MalformedTableKind {
    #[error("blank or comment line encountered after {found} of {expected} points")]
    IncompleteBlock {
        found: usize,
        expected: usize
    },

    #[error(transparent)]
    InvalidPoint(#[from] ParseQuadraturePointError)
}

#[derive(Debug, Error)]
pub enum QuadratureTableError {
    #[error("unable to open quadrature table '{}'", path.display())]
    ResourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("unable to read quadrature table at line {line}")]
    ResourceRead {
        line: usize,
        #[source]
        source: io::Error
    },

    #[error("malformed quadrature table while parsing order {order}, line {line}: {kind}")]
    MalformedTable {
        order: usize,
        line: usize,
        kind: MalformedTableKind
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureTable
// ─────────────────────────────────────────────────────────────────────────────
//
// 依階數索引的求積節點表：points[k] 恰有 k 個節點，points[0] 為空的佔位，
// 使階數與陣列位置對齊。建構後不再修改，可安全地跨執行緒共用唯讀參照。
//
// 檔案格式（每行一個節點，空白分隔）：
//
//   #-order 1
//   0.0 2.0
//   #
//   #-order 2
//   -0.5773502691896257 1.0
//   0.5773502691896257 1.0
//   #
//
// 空白行與 '#' 註解行只能出現在完整區塊之間。

#[derive(Debug, Clone)]
pub struct QuadratureTable {
    points: Vec<Vec<QuadraturePoint>>
}

fn is_block_terminator(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

impl QuadratureTable {
    /// Opens `path`, reads it to the end, and closes it before returning.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<QuadratureTable, QuadratureTableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| QuadratureTableError::ResourceOpen {
            path: path.to_path_buf(),
            source
        })?;
        let table = QuadratureTable::from_reader(BufReader::new(file))?;
        info!("loaded quadrature table '{}' up to order {}", path.display(), table.max_order());
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<QuadratureTable, QuadratureTableError> {
        let mut points: Vec<Vec<QuadraturePoint>> = vec![Vec::new()];
        let mut new_order: Vec<QuadraturePoint> = Vec::with_capacity(1);
        let mut order: usize = 1;
        let mut line_num: usize = 0;

        for line_result in reader.lines() {
            line_num += 1;
            let line = line_result.map_err(|source| QuadratureTableError::ResourceRead {
                line: line_num,
                source
            })?;

            if is_block_terminator(&line) {
                if !new_order.is_empty() {
                    return Err(QuadratureTableError::MalformedTable {
                        order,
                        line: line_num,
                        kind: MalformedTableKind::IncompleteBlock {
                            found: new_order.len(),
                            expected: order
                        }
                    });
                }
                continue;
            }

            let point = line.parse::<QuadraturePoint>().map_err(|error| {
                QuadratureTableError::MalformedTable {
                    order,
                    line: line_num,
                    kind: error.into()
                }
            })?;
            new_order.push(point);

            if new_order.len() == order {
                debug!("committed quadrature order {} at line {}", order, line_num);
                points.push(std::mem::take(&mut new_order));
                order += 1;
                new_order.reserve(order);
            }
        }

        if !new_order.is_empty() {
            warn!(
                "discarding incomplete quadrature order {} ({} of {} points) at end of input",
                order,
                new_order.len(),
                order
            );
        }

        Ok(QuadratureTable { points })
    }

    /// 最高的完整階數；空表為 0。
    pub fn max_order(&self) -> usize {
        self.points.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.max_order() == 0
    }

    /// 第 `order` 階的節點；`order` 為 0 或超出已載入範圍時回傳 `None`。
    pub fn points(&self, order: usize) -> Option<&[QuadraturePoint]> {
        if order == 0 {
            return None;
        }
        self.points.get(order).map(|pts| pts.as_slice())
    }
}
