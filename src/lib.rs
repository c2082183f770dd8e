pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod integration {
        pub mod integrator;
        pub mod integrationerror;
        pub mod trapezoid;
        pub mod simpson;
        pub mod integratormanager;

        pub mod gausslegendre {
            pub mod quadraturepoint;
            pub mod quadraturetable;
            pub mod gaussintegrator;
        }
    }
}
