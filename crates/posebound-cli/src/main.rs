use argh::FromArgs;
use std::path::PathBuf;

use posebound::convert;

#[derive(FromArgs)]
/// Generate a pose bounds artifact from a COLMAP sparse reconstruction
struct Args {
    /// path to the directory containing the sparse reconstruction files
    #[argh(option)]
    sparse_dir: PathBuf,

    /// path where the pose bounds artifact is written
    #[argh(option)]
    output_file: PathBuf,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), convert::ConvertError> {
    env_logger::init();
    let args: Args = argh::from_env();

    let pose_bounds = convert::generate_pose_bounds(&args.sparse_dir, &args.output_file)?;
    println!(
        "Generated pose bounds at {} ({} poses, depth range [{}, {}])",
        args.output_file.display(),
        pose_bounds.poses.len(),
        pose_bounds.bounds[0],
        pose_bounds.bounds[1]
    );

    Ok(())
}
