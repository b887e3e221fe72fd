//! Summaries of repeated scalability measurements.
//!
//! Each input file holds one measurement run; rows are averaged element-wise
//! across runs and truncated to the shortest run.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MeasurementKind {
    /// `<seconds> s ; <kilobytes> kB` per line
    Timem,
    /// `<bytes>\t<file>` per line
    Binary,
    /// `<plugin>\t<seconds>` per line
    Plugins,
}

#[derive(Debug, Clone)]
pub struct MeasurementRun {
    pub source: PathBuf,
    pub content: String,
}

pub fn load_runs(paths: &[PathBuf]) -> Result<Vec<MeasurementRun>> {
    if paths.is_empty() {
        bail!("no measurement files given");
    }

    paths
        .iter()
        .map(|path| {
            if !path.is_file() {
                bail!("measurement file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(MeasurementRun {
                source: path.clone(),
                content,
            })
        })
        .collect()
}

pub fn summarize(kind: MeasurementKind, runs: &[MeasurementRun]) -> Result<String> {
    match kind {
        MeasurementKind::Timem => summarize_timem(runs),
        MeasurementKind::Binary => summarize_binary(runs),
        MeasurementKind::Plugins => summarize_plugins(runs),
    }
}

fn summarize_timem(runs: &[MeasurementRun]) -> Result<String> {
    let mut times = Vec::with_capacity(runs.len());
    let mut memories = Vec::with_capacity(runs.len());

    for run in runs {
        let mut run_times = Vec::new();
        let mut run_memories = Vec::new();
        for line in non_empty_lines(&run.content) {
            let Some((time, memory)) = line.split_once(" ; ") else {
                bail!("malformed timem line {line:?} in {}", run.source.display());
            };
            run_times.push(parse_number(time.trim().trim_end_matches(" s"), &run.source)?);
            run_memories.push(parse_number(memory.trim().trim_end_matches(" kB"), &run.source)?);
        }
        times.push(run_times);
        memories.push(run_memories);
    }

    let mut output = String::from("Time [s],Peak memory usage [kB]\n");
    for (time, memory) in column_means(&times).iter().zip(column_means(&memories)) {
        let _ = writeln!(output, "{time},{memory}");
    }
    Ok(output)
}

fn summarize_binary(runs: &[MeasurementRun]) -> Result<String> {
    let mut names = Vec::new();
    let mut sizes = Vec::with_capacity(runs.len());

    for run in runs {
        names.clear();
        let mut run_sizes = Vec::new();
        for line in non_empty_lines(&run.content) {
            let Some((size, name)) = line.split_once('\t') else {
                bail!("malformed binary size line {line:?} in {}", run.source.display());
            };
            names.push(name.trim().to_string());
            run_sizes.push(parse_number(size, &run.source)?);
        }
        sizes.push(run_sizes);
    }

    let mut output = String::from("File,Binary size [B]\n");
    for (name, size) in names.iter().zip(column_means(&sizes)) {
        let _ = writeln!(output, "{name},{size}");
    }
    Ok(output)
}

fn summarize_plugins(runs: &[MeasurementRun]) -> Result<String> {
    let mut names = Vec::new();
    let mut times = Vec::with_capacity(runs.len());

    for run in runs {
        names.clear();
        let mut run_times = Vec::new();
        for line in run.content.lines() {
            let fields = line.split('\t').collect::<Vec<_>>();
            let [name, time] = fields.as_slice() else {
                continue;
            };
            names.push(name.trim().to_string());
            run_times.push(parse_number(time, &run.source)?);
        }
        times.push(run_times);
    }

    let mut output = String::from("Plugin,Time [s]\n");
    for (name, time) in names.iter().zip(column_means(&times)) {
        let _ = writeln!(output, "{name},{time}");
    }
    Ok(output)
}

fn non_empty_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| !line.trim().is_empty())
}

fn parse_number(raw: &str, source: &Path) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("invalid number {raw:?} in {}", source.display()))
}

/// Element-wise mean over runs, as long as the shortest run.
pub fn column_means(runs: &[Vec<f64>]) -> Vec<f64> {
    let Some(width) = runs.iter().map(Vec::len).min() else {
        return Vec::new();
    };
    let count = runs.len() as f64;

    (0..width)
        .map(|column| runs.iter().map(|run| run[column]).sum::<f64>() / count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, content: &str) -> MeasurementRun {
        MeasurementRun {
            source: PathBuf::from(name),
            content: content.to_string(),
        }
    }

    #[test]
    fn timem_runs_are_averaged_per_row() {
        let runs = vec![
            run("a.txt", "1.5 s ; 1000 kB\n3.0 s ; 2000 kB\n"),
            run("b.txt", "2.5 s ; 3000 kB\n5.0 s ; 4000 kB\n"),
        ];
        let csv = summarize(MeasurementKind::Timem, &runs).expect("timem");
        assert_eq!(csv, "Time [s],Peak memory usage [kB]\n2,2000\n4,3000\n");
    }

    #[test]
    fn binary_sizes_use_names_from_last_run() {
        let runs = vec![
            run("a.txt", "100\tbuggy\n300\tbuggy.bc\n"),
            run("b.txt", "200\tbuggy\n500\tbuggy.bc\n"),
        ];
        let csv = summarize(MeasurementKind::Binary, &runs).expect("binary");
        assert_eq!(csv, "File,Binary size [B]\nbuggy,150\nbuggy.bc,400\n");
    }

    #[test]
    fn plugin_lines_without_two_fields_are_skipped() {
        let runs = vec![
            run("a.txt", "timings:\nochiai\t0.5\ndstar\t1.0\n"),
            run("b.txt", "ochiai\t1.5\nextra\tfield\tignored\ndstar\t2.0\n"),
        ];
        let csv = summarize(MeasurementKind::Plugins, &runs).expect("plugins");
        assert_eq!(csv, "Plugin,Time [s]\nochiai,1\ndstar,1.5\n");
    }

    #[test]
    fn uneven_runs_truncate_to_shortest() {
        let means = column_means(&[vec![1.0, 2.0, 3.0], vec![3.0, 4.0]]);
        assert_eq!(means, vec![2.0, 3.0]);
        assert!(column_means(&[]).is_empty());
    }

    #[test]
    fn invalid_number_names_the_file() {
        let runs = vec![run("broken.txt", "fast s ; 10 kB\n")];
        let error = summarize(MeasurementKind::Timem, &runs).expect_err("invalid");
        assert!(error.to_string().contains("broken.txt"));
    }

    #[test]
    fn missing_measurement_file_is_fatal() {
        let error = load_runs(&[PathBuf::from("/nonexistent/timem.txt")]).expect_err("missing");
        assert!(error.to_string().contains("/nonexistent/timem.txt"));
        assert!(load_runs(&[]).is_err());
    }
}
