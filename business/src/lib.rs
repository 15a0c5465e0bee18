pub mod application {
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod product {
        mod photo;

        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod search_by_name;
        pub mod update;
    }
    #[cfg(test)]
    pub(crate) mod mocks;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod search_by_name;
            pub mod update;
        }
    }
}
