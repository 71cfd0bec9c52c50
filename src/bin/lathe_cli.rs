use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lathe_engine::geom::{
    ControlPointSet, LatheDiagnostics, LatheMesh, LatheOptions, QUANTIZE, quantize_f64,
    revolve_profile_with_options,
};
use lathe_engine::profile::load_control_points;

const SNAPSHOT_DECIMALS: usize = 6;

const USAGE: &str = r"lathe_cli (lathe-engine)

USAGE:
  lathe_cli run <profile-file> [options]
  lathe_cli sample [--out <path>]

The profile file holds one whitespace-separated float triple per line: two
boundary tangent rows followed by at least two profile points
(radius, _, height).

OPTIONS (run):
  --samples <n>      Parameter steps per spline segment (default 12)
  --steps <n>        Angular steps around the axis (default 22)
  --tension <x>      Catmull-Rom tension (default 0)
  --smooth           Emit per-vertex normals
  --caps             Close the ends with triangle fans
  --obj <path>       Write a Wavefront OBJ file
  --snap <path>      Write a golden-style snapshot
  --json <path>      Write the mesh as JSON
  --overwrite        Overwrite existing output files
  -h, --help         Show this help

With no output option, the snapshot is printed to stdout.
";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("lathe_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args::new(args);

    let Some(command) = args.next() else {
        print!("{USAGE}");
        return Ok(());
    };

    match command.as_str() {
        "run" => cmd_run(&mut args),
        "sample" => cmd_sample(&mut args),
        "-h" | "--help" | "help" => {
            print!("{USAGE}");
            Ok(())
        }
        other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
    }
}

fn cmd_run(args: &mut Args) -> Result<(), String> {
    let profile_path = args.next().ok_or("missing profile file")?;

    let mut options = LatheOptions::default();
    let mut obj_path: Option<PathBuf> = None;
    let mut snap_path: Option<PathBuf> = None;
    let mut json_path: Option<PathBuf> = None;
    let mut overwrite = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--samples" => options.samples_per_segment = parse_number(args.value("--samples")?)?,
            "--steps" => options.angular_steps = parse_number(args.value("--steps")?)?,
            "--tension" => options.tension = parse_number(args.value("--tension")?)?,
            "--smooth" => options.smooth = true,
            "--caps" => options.caps = true,
            "--obj" => obj_path = Some(PathBuf::from(args.value("--obj")?)),
            "--snap" => snap_path = Some(PathBuf::from(args.value("--snap")?)),
            "--json" => json_path = Some(PathBuf::from(args.value("--json")?)),
            "--overwrite" => overwrite = true,
            "-h" | "--help" => {
                print!("{USAGE}");
                return Ok(());
            }
            other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
        }
    }

    let profile_path = PathBuf::from(profile_path);
    let control = load_control_points(&profile_path).map_err(|e| e.to_string())?;
    let (mesh, diagnostics) =
        revolve_profile_with_options(&control, &options).map_err(|e| e.to_string())?;

    let name = profile_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("profile");
    let snap = snapshot(name, &control, &mesh, &diagnostics);

    if let Some(path) = snap_path.as_deref() {
        write_text_file(path, &snap, overwrite)?;
        eprintln!("wrote {}", path.display());
    } else if obj_path.is_none() && json_path.is_none() {
        print!("{snap}");
    }

    if let Some(path) = obj_path.as_deref() {
        write_obj_file(path, &mesh, name, overwrite)?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(path) = json_path.as_deref() {
        write_json_file(path, &mesh, overwrite)?;
        eprintln!("wrote {}", path.display());
    }

    eprintln!(
        "{name}: vertices={} triangles={} | {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        diagnostics.summary()
    );

    Ok(())
}

/// A small vase profile, handy for smoke-testing the pipeline without
/// authoring a file first.
const SAMPLE_PROFILE: &str = "\
0 0 1
0 0 1
1 0 0
2 0 1
1 0 2
";

fn cmd_sample(args: &mut Args) -> Result<(), String> {
    let mut out_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_path = Some(PathBuf::from(args.value("--out")?)),
            "-h" | "--help" => {
                print!("{USAGE}");
                return Ok(());
            }
            other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
        }
    }

    if let Some(path) = out_path.as_deref() {
        write_text_file(path, SAMPLE_PROFILE, false)?;
        eprintln!("wrote {}", path.display());
    } else {
        print!("{SAMPLE_PROFILE}");
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(value: String) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid numeric value `{value}`"))
}

fn write_text_file(path: &Path, text: &str, overwrite: bool) -> Result<(), String> {
    if path.exists() && !overwrite {
        return Err(format!(
            "refusing to overwrite existing file {} (use --overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
    }
    fs::write(path, normalize_snapshot_text(text))
        .map_err(|e| format!("write {}: {e}", path.display()))
}

fn write_obj_file(path: &Path, mesh: &LatheMesh, name: &str, overwrite: bool) -> Result<(), String> {
    mesh.validate()
        .map_err(|e| format!("mesh validation failed: {e}"))?;

    if path.exists() && !overwrite {
        return Err(format!(
            "refusing to overwrite existing file {} (use --overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
    }

    let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "# lathe-engine lathe_cli").map_err(|e| format!("write obj: {e}"))?;
    writeln!(w, "o {name}").map_err(|e| format!("write obj: {e}"))?;

    for p in mesh.positions.iter().copied() {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2]).map_err(|e| format!("write obj: {e}"))?;
    }

    if let Some(normals) = mesh.normals.as_ref() {
        for n in normals.iter().copied() {
            writeln!(w, "vn {} {} {}", n[0], n[1], n[2]).map_err(|e| format!("write obj: {e}"))?;
        }
    }

    let has_normals = mesh.normals.is_some();
    for tri in mesh.indices.chunks_exact(3) {
        let a = tri[0] + 1;
        let b = tri[1] + 1;
        let c = tri[2] + 1;

        if has_normals {
            writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")
        } else {
            writeln!(w, "f {a} {b} {c}")
        }
        .map_err(|e| format!("write obj: {e}"))?;
    }

    w.flush().map_err(|e| format!("flush {}: {e}", path.display()))
}

fn write_json_file(path: &Path, mesh: &LatheMesh, overwrite: bool) -> Result<(), String> {
    if path.exists() && !overwrite {
        return Err(format!(
            "refusing to overwrite existing file {} (use --overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
    }

    let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), mesh)
        .map_err(|e| format!("write json {}: {e}", path.display()))
}

fn normalize_snapshot_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    if normalized.ends_with('\n') {
        normalized
    } else {
        format!("{normalized}\n")
    }
}

fn write_f64(out: &mut String, value: f64) {
    let value = quantize_f64(value);
    let _ = write!(out, "{value:.SNAPSHOT_DECIMALS$}");
}

fn write_vec3_line(out: &mut String, prefix: &str, v: [f64; 3]) {
    let _ = write!(out, "{prefix} ");
    write_f64(out, v[0]);
    out.push(' ');
    write_f64(out, v[1]);
    out.push(' ');
    write_f64(out, v[2]);
    out.push('\n');
}

fn write_diagnostics(out: &mut String, diag: &LatheDiagnostics) {
    let _ = writeln!(out, "lathe_diag.control_point_count {}", diag.control_point_count);
    let _ = writeln!(out, "lathe_diag.segment_count {}", diag.segment_count);
    let _ = writeln!(out, "lathe_diag.curve_sample_count {}", diag.curve_sample_count);
    let _ = writeln!(out, "lathe_diag.grid_rows {}", diag.grid_rows);
    let _ = writeln!(out, "lathe_diag.grid_cols {}", diag.grid_cols);
    let _ = writeln!(out, "lathe_diag.vertex_count {}", diag.vertex_count);
    let _ = writeln!(out, "lathe_diag.triangle_count {}", diag.triangle_count);
    let _ = writeln!(out, "lathe_diag.cap_triangle_count {}", diag.cap_triangle_count);
    let _ = writeln!(out, "lathe_diag.on_axis_normal_count {}", diag.on_axis_normal_count);
    let _ = writeln!(out, "lathe_diag.warning_count {}", diag.warnings.len());
    for (idx, warning) in diag.warnings.iter().enumerate() {
        let _ = writeln!(out, "lathe_diag.warning.{idx} {warning}");
    }
}

fn write_control(out: &mut String, control: &ControlPointSet) {
    write_vec3_line(out, "tangent.start", control.start_tangent.to_array());
    write_vec3_line(out, "tangent.end", control.end_tangent.to_array());
    let _ = writeln!(out, "profile.points {}", control.points.len());
    for p in control.points.iter().copied() {
        write_vec3_line(out, "p", p.to_array());
    }
}

fn write_mesh(out: &mut String, mesh: &LatheMesh) {
    let _ = writeln!(out, "mesh.positions {}", mesh.positions.len());
    for p in mesh.positions.iter().copied() {
        write_vec3_line(out, "v", p);
    }

    if let Some(normals) = mesh.normals.as_ref() {
        let _ = writeln!(out, "mesh.normals {}", normals.len());
        for n in normals.iter().copied() {
            write_vec3_line(out, "n", n);
        }
    } else {
        let _ = writeln!(out, "mesh.normals none");
    }

    let _ = writeln!(out, "mesh.triangles {}", mesh.indices.len() / 3);
    for tri in mesh.indices.chunks_exact(3) {
        let _ = writeln!(out, "t {} {} {}", tri[0], tri[1], tri[2]);
    }
}

fn snapshot(
    name: &str,
    control: &ControlPointSet,
    mesh: &LatheMesh,
    diag: &LatheDiagnostics,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# lathe-engine golden v1");
    let _ = writeln!(out, "op revolve_profile");
    let _ = writeln!(out, "profile {name}");
    let _ = writeln!(out, "quantize {QUANTIZE:.1e}");
    write_control(&mut out, control);
    write_diagnostics(&mut out, diag);
    write_mesh(&mut out, mesh);
    normalize_snapshot_text(&out)
}

struct Args {
    args: Vec<String>,
    pos: usize,
}

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self { args, pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    fn value(&mut self, flag: &str) -> Result<String, String> {
        self.next()
            .ok_or_else(|| format!("missing value for {flag}"))
    }
}
