use std::path::PathBuf;

pub struct Args {
    pub config_path: PathBuf,
    /// Validate the configuration and exit without polling.
    pub check_only: bool,
}

pub fn parse() -> Args {
    let mut config_path: Option<PathBuf> = None;
    let mut check_only = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("esb_agent {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Usage: esb_agent [OPTIONS]\n");
                println!("Options:");
                println!("  -c, --config <PATH>  Configuration file path");
                println!("      --check          Validate configuration and exit");
                println!("  -V, --version        Print version");
                println!("  -h, --help           Print help");
                std::process::exit(0);
            }
            "--config" | "-c" => {
                let path = args.next().unwrap_or_else(|| {
                    eprintln!("error: --config requires a path argument");
                    std::process::exit(1);
                });
                config_path = Some(PathBuf::from(path));
            }
            "--check" => check_only = true,
            other => {
                eprintln!("error: unknown argument '{other}'");
                std::process::exit(1);
            }
        }
    }

    match config_path {
        Some(config_path) => Args {
            config_path,
            check_only,
        },
        None => {
            eprintln!("error: --config <path> is required");
            std::process::exit(1);
        }
    }
}
