use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "docker-sweep",
    about = "Stops and removes docker containers (and swarm services) older than a cutoff age"
)]
pub struct Cli {
    /// Containers more than this number of days old will be purged
    #[arg(short = 'd', long, default_value_t = 1)]
    pub days: u32,

    /// Cron expression controlling when purge cycles run
    #[arg(short = 's', long, default_value = "0 0 0 * * *")]
    pub schedule: String,

    /// Timezone in which the schedule is evaluated
    #[arg(short = 'z', long, default_value = "America/Los_Angeles")]
    pub timezone: String,

    /// Purge immediately instead of scheduling
    #[arg(short = 'r', long)]
    pub run_now: bool,

    /// Also remove expired swarm services, before containers
    #[arg(long)]
    pub swarm: bool,

    /// Only purge resources whose name matches this regex
    #[arg(short = 'i', long)]
    pub include: Option<String>,

    /// Never purge resources whose name matches this regex (overrides --include)
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,
}
