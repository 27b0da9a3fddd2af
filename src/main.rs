//! # barcode-pcl CLI
//!
//! Command-line interface for rendering encoded barcodes as PCL.
//!
//! ## Usage
//!
//! ```bash
//! # Render to stdout (pipe to the printer queue)
//! barcode-pcl render --partial 9a1a2221213a1a --textinfo "0:12:5 10:12:0" --width 200
//!
//! # Render a JSON request to a file for an older LaserJet III
//! barcode-pcl render --request label.json --pcl3 --output label.pcl
//!
//! # Show the resolved geometry
//! barcode-pcl geometry --request label.json --height 30
//!
//! # Show diagnostics for malformed label records
//! RUST_LOG=warn barcode-pcl render --request label.json
//! ```

use clap::{Args, Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use barcode_pcl::{
    BarcodeError, DeviceClass, RenderRequest,
    render::{self, geometry},
};

/// barcode-pcl - Render encoded barcodes as HP PCL
#[derive(Parser, Debug)]
#[command(name = "barcode-pcl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a barcode as printer commands
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, default_value = "pcl")]
        format: String,

        /// Write to FILE instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the resolved geometry as JSON
    Geometry {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON request file; other options override its fields
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,

    /// Run-length bar pattern
    #[arg(long)]
    partial: Option<String>,

    /// Label placement records
    #[arg(long)]
    textinfo: Option<String>,

    /// Total width in points (0 = automatic)
    #[arg(long)]
    width: Option<u32>,

    /// Total height in points (0 = automatic)
    #[arg(long)]
    height: Option<u32>,

    /// Points per module (0 = derive from width)
    #[arg(long)]
    scale: Option<f64>,

    /// Horizontal offset in points
    #[arg(long)]
    xoff: Option<u32>,

    /// Vertical offset in points
    #[arg(long)]
    yoff: Option<u32>,

    /// Margin in points
    #[arg(long)]
    margin: Option<u32>,

    /// Omit human-readable text
    #[arg(long)]
    no_text: bool,

    /// Target a LaserJet III class printer (Univers font)
    #[arg(long)]
    pcl3: bool,
}

impl InputArgs {
    fn to_request(&self) -> Result<RenderRequest, BarcodeError> {
        let mut request = match &self.request {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => RenderRequest::default(),
        };

        if let Some(partial) = &self.partial {
            request.partial = partial.clone();
        }
        if let Some(textinfo) = &self.textinfo {
            request.textinfo = textinfo.clone();
        }
        if let Some(width) = self.width {
            request.width = width;
        }
        if let Some(height) = self.height {
            request.height = height;
        }
        if let Some(scale) = self.scale {
            request.scalef = scale;
        }
        if let Some(xoff) = self.xoff {
            request.xoff = xoff;
        }
        if let Some(yoff) = self.yoff {
            request.yoff = yoff;
        }
        if let Some(margin) = self.margin {
            request.margin = margin;
        }
        if self.no_text {
            request.flags.no_text = true;
        }
        if self.pcl3 {
            request.flags.device = DeviceClass::Pcl3;
        }

        Ok(request)
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BarcodeError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            format,
            output,
        } => {
            let format = render::by_name(&format).ok_or_else(|| {
                BarcodeError::InvalidInput(format!(
                    "Unknown output format '{}'. Available: {}",
                    format,
                    render::list_formats().join(", ")
                ))
            })?;
            let request = input.to_request()?;

            let mut sink: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout().lock()),
            };
            render::render(&request, format, &mut *sink)?;
            sink.flush()?;

            if let Some(path) = output {
                eprintln!("Wrote {}", path.display());
            }
        }
        Commands::Geometry { input } => {
            let request = input.to_request()?;
            let geometry = geometry::resolve(&request)?;
            println!("{}", serde_json::to_string_pretty(&geometry)?);
        }
    }

    Ok(())
}
