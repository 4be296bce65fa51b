use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Requested role: patient or dentist
        #[arg(long)]
        role: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Requested role: patient or dentist
        #[arg(long)]
        role: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show the current session
    Status,

    /// Evaluate the route guard for a role-scoped view
    Guard {
        /// Role the route requires: patient or dentist
        #[arg(long)]
        role: String,
    },
}
