/// command line interface of the airGM binary
pub mod cli_main;
