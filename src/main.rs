use clap::{ArgAction, Parser, Subcommand};
use codegen::{
    Capabilities, CodegenError, KernelSignature, NumericDescriptor, Options, DEFAULT_DEBUG_LEVEL,
    LANGUAGE, VERSION,
};
use parser::ast::DTypeExpr;
use parser::error::ParseError;
use std::path::PathBuf;
use std::process;
use tracing::Level;

/// Exit code for descriptor text that does not parse
const SYNTAX_ERROR_EXIT: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "scalarmap",
    version,
    about = "Map NumPy-style dtypes to the C scalar types used in generated kernels"
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the C scalar type for each descriptor
    Map {
        #[arg(required = true, value_name = "DTYPE")]
        dtypes: Vec<String>,
    },

    /// Print the real component type for each descriptor
    Real {
        #[arg(required = true, value_name = "DTYPE")]
        dtypes: Vec<String>,
    },

    /// Print the tabulate_tensor signature for a scalar and a geometry type
    Signature {
        /// Scalar type of the element data
        dtype: String,

        /// Geometry type
        xdtype: String,

        /// Function name to declare
        #[arg(long, default_value = "tabulate_tensor", value_parser = parse_symbol)]
        symbol: String,

        /// Emit LLVM IR from the JIT backend instead of a C prototype
        #[arg(long)]
        jit: bool,
    },

    /// Print the effective generator options as JSON
    Options {
        /// JSON file to load instead of the defaults
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn parse_symbol(symbol: &str) -> Result<String, String> {
    if codegen::is_c_identifier(symbol) {
        Ok(symbol.to_string())
    } else {
        Err(format!("'{}' is not a valid C identifier", symbol))
    }
}

/// A failure together with the text it should be reported against.
enum Failure {
    Syntax {
        name: &'static str,
        source: String,
        errors: Vec<ParseError>,
    },
    Codegen {
        name: &'static str,
        source: String,
        error: CodegenError,
    },
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Failure::Syntax { .. } => SYNTAX_ERROR_EXIT,
            Failure::Codegen { error, .. } => error.exit_code(),
        }
    }

    fn report(&self) {
        let printed = match self {
            Failure::Syntax {
                name,
                source,
                errors,
            } => parser::error::report_errors(name, source, errors),
            Failure::Codegen {
                name,
                source,
                error,
            } => codegen::report_codegen_error(name, source, error),
        };
        if let Err(e) = printed {
            // Could not render the report; fall back to a single line
            match self {
                Failure::Syntax { source, .. } => eprintln!("error: cannot parse '{}'", source),
                Failure::Codegen { error, .. } => eprintln!("error: {}", error),
            }
            tracing::debug!(error = %e, "report rendering failed");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let capabilities = Capabilities::detect();
    tracing::info!(version = VERSION, language = LANGUAGE, jit = capabilities.has_jit(), "scalarmap starting");

    if let Err(failure) = run(cli.command, &capabilities) {
        failure.report();
        process::exit(failure.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose.saturating_add(DEFAULT_DEBUG_LEVEL) {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command, capabilities: &Capabilities) -> Result<(), Failure> {
    match command {
        Command::Map { dtypes } => {
            for text in &dtypes {
                let descriptor = descriptor("DTYPE", text)?;
                println!("{} -> {}", text, descriptor.c_type_name());
            }
        }

        Command::Real { dtypes } => {
            for text in &dtypes {
                let real = descriptor("DTYPE", text)?.real_component();
                println!("{} -> {} ({})", text, real, real.c_type_name());
            }
        }

        Command::Signature {
            dtype,
            xdtype,
            symbol,
            jit,
        } => {
            let scalar = descriptor("DTYPE", &dtype)?;
            let geometry = descriptor("XDTYPE", &xdtype)?;
            let geometry_failure = |error: CodegenError| Failure::Codegen {
                name: "XDTYPE",
                error: error.with_descriptor(xdtype.as_str(), 0..xdtype.len()),
                source: xdtype.clone(),
            };

            if jit {
                let ir = capabilities
                    .jit_kernel_signature(scalar, geometry, &symbol)
                    .map_err(|error| match error {
                        CodegenError::UnsupportedType { .. } => geometry_failure(error),
                        other => Failure::Codegen {
                            name: "--jit",
                            source: String::new(),
                            error: other,
                        },
                    })?;
                print!("{}", ir);
            } else {
                let signature =
                    KernelSignature::tabulate_tensor(scalar, geometry).map_err(geometry_failure)?;
                println!("{};", signature.to_c_declaration(&symbol));
            }
        }

        Command::Options { file } => {
            let options = match &file {
                Some(path) => Options::load(path),
                None => Ok(Options::default()),
            };
            let json = options
                .and_then(|options| options.to_json_pretty())
                .map_err(|error| Failure::Codegen {
                    name: "--file",
                    source: String::new(),
                    error,
                })?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Parse, resolve and classify one command-line descriptor.
fn descriptor(name: &'static str, text: &str) -> Result<NumericDescriptor, Failure> {
    let expr: DTypeExpr = parser::parse_dtype(text).map_err(|errors| Failure::Syntax {
        name,
        source: text.to_string(),
        errors,
    })?;

    let descriptor = codegen::descriptor_for(&expr).map_err(|error| Failure::Codegen {
        name,
        source: text.to_string(),
        error,
    })?;
    tracing::debug!(input = text, %descriptor, "classified");
    Ok(descriptor)
}
