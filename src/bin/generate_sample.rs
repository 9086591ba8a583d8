use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

// ---------------------------------------------------------------------------
// Record layouts, one per output file
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SectoralRow {
    sector: &'static str,
    year: i32,
    #[serde(rename = "GVA_Crore")]
    gva_crore: f64,
    #[serde(rename = "Growth_Rate")]
    growth_rate: f64,
}

#[derive(Serialize)]
struct ContributionRow {
    #[serde(rename = "Sector")]
    sector: &'static str,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "GDP_Contribution")]
    gdp_contribution: f64,
}

#[derive(Serialize)]
struct RegionalRow {
    #[serde(rename = "State")]
    state: &'static str,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Quarter")]
    quarter: &'static str,
    #[serde(rename = "Regional_Dev_Index")]
    regional_dev_index: f64,
}

#[derive(Serialize)]
struct PolicyRow {
    #[serde(rename = "Policy_Zone")]
    policy_zone: &'static str,
    #[serde(rename = "HCES_Consumption")]
    hces_consumption: f64,
    #[serde(rename = "CPI_Stability")]
    cpi_stability: f64,
    #[serde(rename = "Regional_Dev_Index")]
    regional_dev_index: f64,
    #[serde(rename = "Priority")]
    priority: &'static str,
}

const SECTORS: [(&str, f64); 6] = [
    ("Agriculture", 18.0),
    ("Manufacturing", 16.5),
    ("Trade & Hospitality", 12.0),
    ("Financial Services", 9.5),
    ("Construction", 8.0),
    ("Public Administration", 6.5),
];

const STATES: [&str; 16] = [
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Delhi",
    "Goa",
    "Gujarat",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Tamil Nadu",
    "Uttar Pradesh",
    "West Bengal",
];

const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

const ZONES: [(&str, &str); 4] = [
    ("Growth Engine", "Sustain"),
    ("Emerging", "Accelerate"),
    ("Transitional", "Stabilise"),
    ("Lagging", "Priority Support"),
];

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir).context("creating output directory")?;

    let mut rng = SimpleRng::new(42);
    let years = 2012..=2023;

    let mut sectoral = Vec::new();
    let mut contributions = Vec::new();
    for &(sector, base) in &SECTORS {
        let mut share = base;
        for year in years.clone() {
            share += rng.uniform(-0.6, 0.6);
            contributions.push(ContributionRow {
                sector,
                year,
                gdp_contribution: (share * 100.0).round() / 100.0,
            });
            sectoral.push(SectoralRow {
                sector,
                year,
                gva_crore: (share * 12_500.0 * rng.uniform(0.95, 1.05)).round(),
                growth_rate: (rng.uniform(-2.0, 9.0) * 10.0).round() / 10.0,
            });
        }
    }

    let mut regional = Vec::new();
    for (i, &state) in STATES.iter().enumerate() {
        let level = 0.25 + 0.6 * (i as f64 / STATES.len() as f64);
        for &quarter in &QUARTERS {
            regional.push(RegionalRow {
                state,
                year: 2023,
                quarter,
                regional_dev_index: level + rng.uniform(-0.05, 0.05),
            });
        }
    }

    let policy: Vec<PolicyRow> = ZONES
        .iter()
        .enumerate()
        .map(|(i, &(policy_zone, priority))| PolicyRow {
            policy_zone,
            hces_consumption: 6200.0 - 900.0 * i as f64 + rng.uniform(-150.0, 150.0),
            cpi_stability: rng.uniform(0.5, 3.0),
            regional_dev_index: 0.8 - 0.15 * i as f64 + rng.uniform(-0.02, 0.02),
            priority,
        })
        .collect();

    write_rows(&out_dir.join("Merged_Sectoral_Dataset.csv"), &sectoral)?;
    write_rows(&out_dir.join("Top6_Sectors_GDP_Contribution.csv"), &contributions)?;
    write_rows(&out_dir.join("Regional_Development_Index.csv"), &regional)?;
    write_rows(&out_dir.join("Policy_Summary_Table.csv"), &policy)?;
    Ok(())
}
