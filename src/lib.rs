pub mod shared {
    pub mod core {
        pub mod dates;
    }
    pub mod http {
        pub mod answer;
        pub mod request_error;
    }
}

pub mod modules {
    pub mod calendar {
        pub mod core {
            pub mod event;
            pub mod event_store;
            pub mod period;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
