//! Reporting - speedup table, CSV persistence and the comparison chart

use anyhow::Context;
use plotters::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// One sweep point with both measurements and the derived speedup
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub entity_count: usize,
    pub sequential_secs: f64,
    pub concurrent_secs: f64,
    pub speedup: f64,
}

/// Sequential/concurrent time ratio, treating a zero concurrent time as 1
/// so a too-fast measurement never reads as infinite speedup.
pub fn speedup_factor(sequential_secs: f64, concurrent_secs: f64) -> f64 {
    if concurrent_secs > 0.0 {
        sequential_secs / concurrent_secs
    } else {
        1.0
    }
}

/// Pair up the two measurement sequences, preserving sweep order.
pub fn build_rows(
    entity_counts: &[usize],
    sequential: &[Duration],
    concurrent: &[Duration],
) -> Vec<SweepRow> {
    debug_assert_eq!(entity_counts.len(), sequential.len());
    debug_assert_eq!(entity_counts.len(), concurrent.len());

    entity_counts
        .iter()
        .zip(sequential)
        .zip(concurrent)
        .map(|((&entity_count, seq), conc)| {
            let sequential_secs = seq.as_secs_f64();
            let concurrent_secs = conc.as_secs_f64();
            SweepRow {
                entity_count,
                sequential_secs,
                concurrent_secs,
                speedup: speedup_factor(sequential_secs, concurrent_secs),
            }
        })
        .collect()
}

/// Write the delimited results table: times to 3 decimals, speedup to 2.
pub fn write_table<W: Write>(writer: &mut W, rows: &[SweepRow]) -> io::Result<()> {
    writeln!(writer, "EntityCount,SingleThreadTime,MultiThreadTime,Speedup")?;
    for row in rows {
        writeln!(
            writer,
            "{},{:.3},{:.3},{:.2}",
            row.entity_count, row.sequential_secs, row.concurrent_secs, row.speedup
        )?;
    }
    Ok(())
}

/// Persist the results table, overwriting any previous run's file.
pub fn save_table(path: &Path, rows: &[SweepRow]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create results file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_table(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

/// Render the sequential-vs-concurrent comparison chart as a PNG.
///
/// Each concurrent point is annotated with its speedup factor.
pub fn render_chart(path: &Path, rows: &[SweepRow]) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_count = rows.iter().map(|r| r.entity_count).max().unwrap_or(1) as f64;
    let max_time = rows
        .iter()
        .map(|r| r.sequential_secs.max(r.concurrent_secs))
        .fold(0.0_f64, f64::max)
        .max(1e-3);

    let mut chart = ChartBuilder::on(&root)
        .caption("Entity processing: sequential vs partitioned", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_count * 1.05, 0.0..max_time * 1.15)?;

    chart
        .configure_mesh()
        .x_desc("Entity count")
        .y_desc("Elapsed time (s)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.entity_count as f64, r.sequential_secs)),
            RED.stroke_width(2),
        ))?
        .label("sequential")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.entity_count as f64, r.sequential_secs), 4, RED.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.entity_count as f64, r.concurrent_secs)),
            BLUE.stroke_width(2),
        ))?
        .label("partitioned workers")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.entity_count as f64, r.concurrent_secs), 4, BLUE.filled())),
    )?;

    chart.draw_series(rows.iter().map(|r| {
        let color = if r.speedup > 1.0 { &GREEN } else { &RED };
        Text::new(
            format!("x{:.1}", r.speedup),
            (r.entity_count as f64, r.concurrent_secs),
            ("sans-serif", 16).into_font().color(color),
        )
    }))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
