pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Queue sizes, table page sizes, widget limits and HTTP timeouts,
    //! grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying activity events.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size of the channel carrying fetch outcomes back to the board.
    pub const OUTCOME_QUEUE_SIZE: usize = 64;

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Local backend used when nothing else is configured.
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";

    /// Environment variable overriding the configured API base URL.
    pub const API_URL_ENV_VAR: &str = "DASHBOARD_API_URL";

    /// HTTP timeouts. There is no retry: a timed out request lands in the error state.
    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // TABLES
    // =============================================================================

    /// Rows per page for the server-paginated tables.
    pub mod page_size {
        pub const ORDERS: u32 = 15;
        pub const PRODUCTS: u32 = 15;
        pub const SELLERS: u32 = 15;
        pub const REVIEWS: u32 = 10;
    }

    // =============================================================================
    // WIDGET LIMITS
    // =============================================================================

    pub mod limits {
        /// `limit` sent to the seller top-products and recent-orders endpoints.
        pub const SELLER_TOP_ITEMS: u32 = 5;

        /// Rows requested for the platform top-sellers-by-volume widget.
        pub const TOP_SELLERS_BY_VOLUME: u32 = 10;

        /// Categories shown individually before the rest is folded into "Other".
        pub const TOP_CATEGORIES: usize = 7;
    }

    // =============================================================================
    // PREDICTIVE INSIGHTS
    // =============================================================================

    pub mod predictive {
        /// Forecast points dated after this day count towards predicted GMV.
        pub const FORECAST_REFERENCE_DATE: &str = "2018-09-01";

        /// Days without a purchase after which a non-churned customer is at risk.
        pub const HIGH_RISK_RECENCY_DAYS: f64 = 90.0;

        /// Maximum purchase count for a customer to be considered at risk.
        pub const HIGH_RISK_MAX_FREQUENCY: f64 = 2.0;
    }
}
