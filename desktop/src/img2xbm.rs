use std::path::Path;

use argh::FromArgs;
use embedded_xbm::{Mode, Policy};
use log::{info, warn};

#[derive(FromArgs)]
/// Converts an image into an XBM monochrome bitmap
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output XBM file path
    #[argh(option, short = 'o')]
    output_path: String,

    /// name of the defines and the array (default: output file stem)
    #[argh(option, short = 'n')]
    name: Option<String>,

    /// pixel decision: color_and_alpha, color_or_alpha, only_alpha or ignore_alpha
    #[argh(option, short = 'm', from_str_fn(parse_mode))]
    mode: Option<Mode>,

    /// color threshold in [0, 1] (default: 0.3)
    #[argh(option)]
    color_threshold: Option<f32>,

    /// alpha threshold in [0, 1] (default: 0.2)
    #[argh(option)]
    alpha_threshold: Option<f32>,

    /// write the packed bytes instead of XBM text
    #[argh(switch, short = 'r')]
    raw: bool,
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    value
        .parse()
        .map_err(|_| format!("unknown mode '{value}'"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input_path)
        .expect("Failed to open input image")
        .into_rgba8();

    let width = image.width() as usize;
    let height = image.height() as usize;
    if width % 8 != 0 || height % 8 != 0 {
        panic!(
            "Input image sides must be multiples of 8 (got {}x{}), scale or pad it first",
            width, height
        );
    }

    let policy = policy_from_args(&args);
    info!(
        "Converting {} ({}x{}) with {:?}",
        args.input_path, width, height, policy
    );

    if args.raw {
        encode_raw(image.as_raw(), width, height, policy, &args.output_path);
    } else {
        let name = args
            .name
            .clone()
            .unwrap_or_else(|| name_from_path(&args.output_path));
        encode_xbm(image.as_raw(), width, height, policy, &name, &args.output_path);
    }
}

fn policy_from_args(args: &Args) -> Policy {
    let mut policy = if args.raw {
        Policy::BUFFER_DEFAULT
    } else {
        Policy::FILE_DEFAULT
    };
    if let Some(mode) = args.mode {
        policy.mode = mode;
    }
    if let Some(threshold) = args.color_threshold {
        policy = policy.with_color_threshold(threshold);
    }
    if let Some(threshold) = args.alpha_threshold {
        policy = policy.with_alpha_threshold(threshold);
    }
    for threshold in [policy.color_threshold, policy.alpha_threshold] {
        if !(0.0..=1.0).contains(&threshold) {
            warn!("Threshold {} is outside [0, 1]", threshold);
        }
    }
    policy
}

/// A C identifier derived from the file stem.
fn name_from_path(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn encode_raw(data: &[u8], width: usize, height: usize, policy: Policy, out_path: &str) {
    let size = embedded_xbm::bytes_for_dimensions(width, height).expect("Invalid image size");
    let mut buffer = vec![0u8; size];
    embedded_xbm::convert_with(data, width, height, 4, &mut buffer, policy)
        .expect("Failed to convert image");
    std::fs::write(out_path, &buffer).expect("Failed to write output file");
    info!("Wrote {} bytes to {}", size, out_path);
}

fn encode_xbm(
    data: &[u8],
    width: usize,
    height: usize,
    policy: Policy,
    name: &str,
    out_path: &str,
) {
    embedded_xbm::write_xbm_file_with(out_path, data, width, height, 4, name, policy)
        .expect("Failed to write XBM file");
    info!("Wrote {} as '{}'", out_path, name);
}
