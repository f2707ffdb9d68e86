pub mod domain {
    pub mod errors;
    pub mod category {
        pub mod model;
    }
    pub mod order {
        pub mod model;
    }
    pub mod product {
        pub mod model;
    }
    pub mod shared {
        pub mod slug;
    }
    pub mod user {
        pub mod model;
    }
}
