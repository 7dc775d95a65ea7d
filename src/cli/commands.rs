use tracing::warn;
use validator::Validate;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::models::{MunicipalityDataset, MunicipalityRecord};
use crate::processors::{normalize_crs, CentroidTransformer};
use crate::readers::{locate_shapefile, ShapefileReader};
use crate::utils::constants::DEFAULT_GEOGRAPHIC_CRS;
use crate::utils::{PipelineConfig, ProgressReporter};
use crate::writers::CsvExporter;

/// Runs the pipeline stages in fixed order: resolve paths, locate, load,
/// normalize CRS, compute centroids, build records, export. Every stage
/// runs exactly once; any error aborts the run.
pub fn run(cli: Cli) -> Result<()> {
    let config = PipelineConfig::resolve(cli.input_dir, cli.output_file);

    // The output directory is created up front, before the input is even
    // located; a missing-input failure still leaves it in place.
    config.ensure_output_dir()?;

    let shp_path = locate_shapefile(&config.input_dir)?;
    println!("Reading shapefile: {}", shp_path.display());

    let mut dataset = ShapefileReader::read(&shp_path)?;
    normalize_crs(&mut dataset);

    let records = compute_records(&dataset, cli.quiet)?;
    report_out_of_bounds(&records);

    if cli.validate_only {
        println!("Validation complete - no output file written");
        return Ok(());
    }

    CsvExporter::write(&records, &config.output_file)?;
    println!("Output written to: {}", config.output_file.display());

    Ok(())
}

/// Reproject, take centroids, extract coordinates, map attributes to their
/// output labels. One record per feature, input order preserved.
fn compute_records(dataset: &MunicipalityDataset, quiet: bool) -> Result<Vec<MunicipalityRecord>> {
    // normalize_crs has already filled the CRS; the fallback only repeats
    // its default.
    let source_crs = dataset.crs.as_deref().unwrap_or(DEFAULT_GEOGRAPHIC_CRS);
    let transformer = CentroidTransformer::new(source_crs)?;

    let progress = ProgressReporter::new(
        dataset.features.len() as u64,
        "Computing centroids...",
        quiet,
    );
    let centroids = transformer.centroids(&dataset.features, Some(&progress))?;
    progress.finish_with_message(&format!("Computed {} centroids", centroids.len()));

    Ok(dataset
        .features
        .iter()
        .zip(centroids)
        .map(|(feature, centroid)| MunicipalityRecord::from_feature(feature, centroid))
        .collect())
}

/// Flags centroids outside the expected coordinate ranges. Records are
/// reported, never dropped: the output keeps one row per input feature.
fn report_out_of_bounds(records: &[MunicipalityRecord]) {
    let mut outside = 0usize;
    for record in records {
        if record.validate().is_err() || !record.is_within_brazil_bounds() {
            warn!(
                "centroid of {} ({}) outside expected bounds: lat={} lon={}",
                record.codigo_municipio, record.municipio, record.latitude, record.longitude
            );
            outside += 1;
        }
    }
    if outside > 0 {
        println!("⚠️  {} centroid(s) fall outside the Brazilian bounds", outside);
    }
}
