use crate::core::Plane;
use crate::session::{BuildError, Session};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "gridbot")]
#[command(about = "Move a toy robot around a bounded grid, one command per line")]
pub struct CliConfig {
    #[arg(long, default_value_t = Plane::DEFAULT_BOUND, help = "Largest valid x coordinate")]
    pub width: u32,

    #[arg(long, default_value_t = Plane::DEFAULT_BOUND, help = "Largest valid y coordinate")]
    pub height: u32,

    #[arg(long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn session(&self) -> Result<Session, BuildError> {
        Session::builder()
            .width(self.width)
            .height(self.height)
            .build()
    }
}
