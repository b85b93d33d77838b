pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying view updates to the TUI.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Live update configuration
    pub mod polling {
        use std::time::Duration;

        /// Interval between dashboard refreshes (milliseconds)
        pub const DEFAULT_INTERVAL_MS: u64 = 10_000;

        /// Smallest interval accepted from the command line (milliseconds)
        pub const MIN_INTERVAL_MS: u64 = 500;

        /// Helper function to get the default poll interval
        pub const fn default_interval() -> Duration {
            Duration::from_millis(DEFAULT_INTERVAL_MS)
        }
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    pub mod display {
        use std::time::Duration;

        /// How long an analysis result stays visible (milliseconds)
        pub const RESULT_DISPLAY_MS: u64 = 5_000;

        /// Number of posts shown in the live feed
        pub const MAX_FEED_POSTS: usize = 10;

        /// How long the splash screen stays up (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 1_500;

        /// Placeholder shown when the service has no posts
        pub const EMPTY_FEED_MESSAGE: &str = "No posts yet. Start by analyzing some text above!";

        /// Placeholder shown when there are no counts to chart
        pub const EMPTY_CHART_MESSAGE: &str = "No data yet";

        /// Placeholder shown when the service has no trend buckets
        pub const EMPTY_TRENDS_MESSAGE: &str = "Trend data will appear here";

        /// Helper function to get the result display duration
        pub const fn result_display() -> Duration {
            Duration::from_millis(RESULT_DISPLAY_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        /// Base URL of a locally running sentiment service
        pub const LOCAL_API_URL: &str = "http://localhost:5000";

        /// Environment variable overriding the configured API URL
        pub const API_URL_ENV_VAR: &str = "SENTIMENT_API_URL";

        /// Connect and request timeout for every call (seconds)
        pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Smallest timeout honored from the config file (seconds)
        pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
    }

    // =============================================================================
    // SEEDING CONFIGURATION
    // =============================================================================

    pub mod seeding {
        use std::time::Duration;

        /// Texts submitted by the `seed` command
        pub const SAMPLE_TEXTS: [&str; 5] = [
            "This is absolutely fantastic! Best product ever!",
            "I'm really disappointed with this service.",
            "The weather today is quite normal, nothing special.",
            "Amazing experience, would definitely recommend to others!",
            "Not what I expected, could be much better.",
        ];

        /// Delay between consecutive sample submissions (milliseconds)
        pub const SEED_DELAY_MS: u64 = 1_000;

        pub const fn seed_delay() -> Duration {
            Duration::from_millis(SEED_DELAY_MS)
        }
    }
}
