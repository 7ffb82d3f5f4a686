mod batch;

use std::path::PathBuf;

use argh::FromArgs;

use batch::PairingStrategy;
use cloudcast::c3d::camera::CameraIntrinsic;
use cloudcast::c3d::io::camera_matrix::read_camera_matrix_txt;

#[derive(FromArgs)]
/// Convert paired RGB and depth captures into point-cloud dataset records
struct Args {
    /// path to the directory containing rgb* and depth* image files
    #[argh(option, short = 'i')]
    input_dir: PathBuf,

    /// path to the directory receiving the dataset records
    #[argh(option, short = 'o')]
    output_dir: PathBuf,

    /// path to the camera matrix calibration file
    #[argh(option, short = 'k')]
    camera_matrix: PathBuf,

    /// pairing strategy: "positional" (default) or "identifier"
    #[argh(
        option,
        default = "PairingStrategy::Positional",
        from_str_fn(parse_pairing)
    )]
    pairing: PairingStrategy,
}

fn parse_pairing(value: &str) -> Result<PairingStrategy, String> {
    match value {
        "positional" => Ok(PairingStrategy::Positional),
        "identifier" => Ok(PairingStrategy::Identifier),
        other => Err(format!("unknown pairing strategy: {other}")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // intrinsics failures are fatal: no record can be produced without them
    let matrix = read_camera_matrix_txt(&args.camera_matrix)?;
    let intrinsic = CameraIntrinsic::from_matrix(&matrix)?;
    log::info!("Loaded camera matrix from {:?}", args.camera_matrix);

    std::fs::create_dir_all(&args.output_dir)?;

    let summary = batch::run_batch(&args.input_dir, &args.output_dir, &intrinsic, args.pairing)?;
    log::info!(
        "Batch complete: {} records written, {} pairs skipped",
        summary.processed,
        summary.skipped
    );

    Ok(())
}
