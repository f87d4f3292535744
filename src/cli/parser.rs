use crate::export::ExportFormat;
use crate::models::{Animation, BorderRadius, BorderWidth, FontStyle, Layout, Shadow};
use clap::{Parser, Subcommand};

/// Command-line interface definition for SafeSailing
/// Publish boat-tour disruptions and serve the embeddable alert widget
#[derive(Parser)]
#[command(
    name = "safesailing",
    version = env!("CARGO_PKG_VERSION"),
    about = "Publish weather-related boat-tour disruptions and serve an embeddable alert widget",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            requires = "check",
            help = "Add missing fields with their default values (with --check)"
        )]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a disruption for a date, or one per day for a date range
    Add {
        /// Date of the disruption (YYYY-MM-DD); first day when --to is given
        date: String,

        #[arg(long = "to", value_name = "DATE", help = "Last day of a range (inclusive)")]
        to: Option<String>,

        #[arg(long = "full-day", help = "Tours are suspended for the whole day")]
        full_day: bool,

        #[arg(long = "start", value_name = "HH:MM", help = "Start of the disruption")]
        start: Option<String>,

        #[arg(long = "end", value_name = "HH:MM", help = "End of the disruption")]
        end: Option<String>,

        #[arg(long = "reason", short = 'r', help = "Reason shown to customers")]
        reason: Option<String>,

        #[arg(long = "refund", value_name = "AMOUNT", help = "Refund offered per booking")]
        refund: Option<f64>,
    },

    /// Change fields of an existing disruption
    Update {
        /// Disruption id (see `list`)
        id: i64,

        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long = "full-day", conflicts_with = "partial")]
        full_day: bool,

        #[arg(long = "partial", help = "Turn a full-day disruption into a timed one")]
        partial: bool,

        #[arg(long = "start", value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long = "end", value_name = "HH:MM")]
        end: Option<String>,

        #[arg(long = "reason", short = 'r')]
        reason: Option<String>,

        #[arg(long = "refund", value_name = "AMOUNT", conflicts_with = "no_refund")]
        refund: Option<f64>,

        #[arg(long = "no-refund", help = "Remove the refund")]
        no_refund: bool,
    },

    /// Delete a disruption by id
    Del {
        /// Disruption id (see `list`)
        id: i64,
    },

    /// List disruptions
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "active", help = "Only disruptions from today onwards")]
        active: bool,

        #[arg(long = "all", conflicts_with = "period", help = "Every stored disruption")]
        all: bool,
    },

    /// Show or change the widget appearance
    Widget {
        #[arg(long = "show", help = "Print the current widget settings")]
        show: bool,

        #[arg(long = "preview", help = "Print the widget HTML for today's active disruptions")]
        preview: bool,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "primary-color", value_name = "#RRGGBB")]
        primary_color: Option<String>,

        #[arg(long = "accent-color", value_name = "#RRGGBB")]
        accent_color: Option<String>,

        #[arg(long = "show-dates", value_name = "BOOL")]
        show_dates: Option<bool>,

        #[arg(long = "show-times", value_name = "BOOL")]
        show_times: Option<bool>,

        #[arg(long = "show-icon", value_name = "BOOL")]
        show_icon: Option<bool>,

        #[arg(long, value_enum)]
        animation: Option<Animation>,

        #[arg(long = "border-radius", value_enum)]
        border_radius: Option<BorderRadius>,

        #[arg(long, value_enum)]
        shadow: Option<Shadow>,

        #[arg(long = "font-style", value_enum)]
        font_style: Option<FontStyle>,

        #[arg(long, value_enum)]
        layout: Option<Layout>,

        #[arg(long = "border-width", value_enum)]
        border_width: Option<BorderWidth>,
    },

    /// Print the code to embed the widget on a website
    Embed {
        #[arg(long = "base-url", help = "Public URL of the widget server (default from config)")]
        base_url: Option<String>,

        #[arg(long = "iframe", help = "Only the iframe snippet")]
        iframe: bool,

        #[arg(long = "script", help = "Only the script snippet")]
        script: bool,
    },

    /// Disruption statistics
    Analytics {
        #[arg(long, short, help = "Restrict to year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Compose a social media post for a disruption
    Social {
        /// Disruption id (see `list`)
        id: i64,

        #[arg(long = "preview", help = "Only print the composed message")]
        preview: bool,
    },

    /// Export disruption data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Serve the embeddable widget over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}
