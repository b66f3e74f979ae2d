use clap::{Parser, Subcommand};
use colored::Colorize;
use nativeutils_sample::commands;

#[derive(Parser)]
#[command(name = "nativeutils")]
#[command(about = "Inspect and package the nativeutils sample library", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the symbols exported by this build
    Exports {
        /// Path to nativeutils.toml (defaults to ./nativeutils.toml if present)
        #[arg(long)]
        config: Option<String>,
    },
    /// Print the JNI symbol name of a native method
    Mangle {
        /// Java class, e.g. deltix.NativeUtilsSample$Imports
        class: String,
        /// Method name
        method: String,
        /// Method descriptor for overloaded methods, e.g. (II)D
        #[arg(long)]
        descriptor: Option<String>,
    },
    /// Show where the library goes in the $(OS)/$(ARCH) resource tree
    Layout {
        #[arg(long)]
        config: Option<String>,
    },
    /// Generate a C header declaring the exports
    Header {
        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<String>,
        /// Library name used for the include guard
        #[arg(long, default_value = "nativeutils_sample")]
        library: String,
    },
    /// Copy a built library into the resource tree
    Stage {
        /// Path to the built .dll/.so/.dylib
        library: String,
        #[arg(long)]
        config: Option<String>,
        /// Override resources.root
        #[arg(long)]
        root: Option<String>,
        /// Write a zstd-compressed `<file>.zst` instead of a plain copy
        #[arg(long)]
        compress: bool,
    },
    /// Call an exported function
    Call {
        #[command(subcommand)]
        function: Function,
    },
}

#[derive(Subcommand)]
enum Function {
    /// avg(a, b) = (a + b) * 0.5
    Avg {
        #[arg(allow_hyphen_values = true)]
        a: i32,
        #[arg(allow_hyphen_values = true)]
        b: i32,
    },
    /// Native pointer width in bytes
    PtrSize,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Exports { config } => {
            commands::exports::execute(config.as_deref())
        }
        Commands::Mangle { class, method, descriptor } => {
            commands::mangle::execute(&class, &method, descriptor.as_deref())
        }
        Commands::Layout { config } => {
            commands::layout::execute(config.as_deref())
        }
        Commands::Header { output, library } => {
            commands::header::execute(&library, output.as_deref())
        }
        Commands::Stage { library, config, root, compress } => {
            commands::stage::execute(&library, config.as_deref(), root.as_deref(), compress)
        }
        Commands::Call { function } => match function {
            Function::Avg { a, b } => commands::call::execute_avg(a, b),
            Function::PtrSize => commands::call::execute_ptr_size(),
        },
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
