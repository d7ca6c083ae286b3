pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_errors;
                pub mod http_responses;
            }
            pub mod outbound {
                pub mod registry_in_memory;
                pub mod roster;
            }
        }
    }
}

pub mod shell;
