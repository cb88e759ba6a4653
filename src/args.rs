use std::path::PathBuf;

use clap::*;

#[derive(Parser, Debug, Clone)]
#[command(name = "makegen", version, about = "Generates a two-rule Makefile from flags and source files")]
pub struct Args {
    /// Path of the generated Makefile
    #[arg(long, env = "MAKEGEN_MAKEFILE", default_value = "Makefile")]
    pub makefile: PathBuf,

    /// Compiler used when no `-cc` override is given
    #[arg(long, env = "MAKEGEN_CC", default_value = "gcc")]
    pub default_cc: String,

    /// {executableName} -f {CFLAGS} -s {SOURCE FILES} [-cc {compiler}]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}
