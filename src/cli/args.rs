use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geomunicipios")]
#[command(about = "Compute municipality centroids from IBGE boundary shapefiles")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        help = "Directory scanned for the boundary shapefile [default: BR_Municipios_2024]"
    )]
    pub input_dir: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Output CSV path [default: Dados/GeoMunicipios.csv]"
    )]
    pub output_file: Option<PathBuf>,

    #[arg(long, default_value = "false", help = "Run the pipeline without writing the output file")]
    pub validate_only: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase verbosity (-v, -vv)")]
    pub verbose: u8,

    #[arg(short, long, help = "Suppress progress output")]
    pub quiet: bool,
}
