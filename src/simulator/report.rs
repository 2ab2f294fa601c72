//! Simulation report generation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::SimConfig;
use super::runner::RunStats;
use crate::fishing::types::Rarity;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub power: u8,
    pub location_id: String,
    pub total_casts: u64,

    /// Indexed by `Rarity as usize`
    pub rarity_counts: [u64; 4],
    /// Share of casts per rarity, keyed by lowercase rarity name
    pub rarity_share: BTreeMap<String, f64>,

    pub total_value: u64,
    pub avg_value: f64,
    pub avg_size_cm: f64,
    pub avg_ticks_to_catch: f64,
    pub announcements: u64,
    pub avg_achievements: f64,
    pub avg_final_level: f64,
    pub avg_final_coins: f64,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let total_casts: u64 = runs.iter().map(|r| r.casts).sum();

        let mut rarity_counts = [0u64; 4];
        for run in &runs {
            for (total, count) in rarity_counts.iter_mut().zip(run.rarity_counts) {
                *total += count;
            }
        }

        let casts = total_casts.max(1) as f64;
        let runs_f = num_runs.max(1) as f64;

        let rarity_share = Rarity::ALL
            .iter()
            .map(|&rarity| {
                (
                    rarity.name().to_string(),
                    rarity_counts[rarity as usize] as f64 / casts,
                )
            })
            .collect();

        let total_value: u64 = runs.iter().map(|r| r.total_value).sum();

        Self {
            num_runs,
            power: config.power.value(),
            location_id: config.location_id.clone(),
            total_casts,
            rarity_counts,
            rarity_share,
            total_value,
            avg_value: total_value as f64 / casts,
            avg_size_cm: runs.iter().map(|r| r.total_size_cm).sum::<u64>() as f64 / casts,
            avg_ticks_to_catch: runs.iter().map(|r| r.total_ticks_to_catch).sum::<u64>() as f64
                / casts,
            announcements: runs.iter().map(|r| r.announcements).sum(),
            avg_achievements: runs.iter().map(|r| r.achievements).sum::<u64>() as f64 / runs_f,
            avg_final_level: runs.iter().map(|r| r.final_level as f64).sum::<f64>() / runs_f,
            avg_final_coins: runs.iter().map(|r| r.final_coins as f64).sum::<f64>() / runs_f,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 SMILEY FISHER SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, casts: {}, power: {}, location: {}\n\n",
            self.num_runs, self.total_casts, self.power, self.location_id
        ));

        report.push_str("── RARITY ──────────────────────────────────────────────────────\n");
        for rarity in Rarity::ALL {
            let count = self.rarity_counts[rarity as usize];
            let pct = count as f64 / self.total_casts.max(1) as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:<16} {:>7} {:>5.1}% {}\n",
                rarity.label(),
                count,
                pct,
                bar
            ));
        }

        report.push_str("\n── ECONOMY ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Total Value:         {}\n", self.total_value));
        report.push_str(&format!("  Avg Value:           {:.2}\n", self.avg_value));
        report.push_str(&format!("  Avg Size:            {:.1} cm\n", self.avg_size_cm));
        report.push_str(&format!(
            "  Avg Ticks to Catch:  {:.1}\n",
            self.avg_ticks_to_catch
        ));
        report.push_str(&format!("  Announcements:       {}\n", self.announcements));

        report.push_str("\n── PROGRESSION ─────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!(
            "  Avg Final Coins:     {:.0}\n",
            self.avg_final_coins
        ));
        report.push_str(&format!(
            "  Avg Achievements:    {:.1}\n",
            self.avg_achievements
        ));

        report
    }

    /// One-line summary for quiet mode.
    pub fn summary_line(&self) -> String {
        format!(
            "casts={} common={} rare={} epic={} legendary={} avg_value={:.2}",
            self.total_casts,
            self.rarity_counts[Rarity::Common as usize],
            self.rarity_counts[Rarity::Rare as usize],
            self.rarity_counts[Rarity::Epic as usize],
            self.rarity_counts[Rarity::Legendary as usize],
            self.avg_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(casts: u64, counts: [u64; 4], value: u64) -> RunStats {
        RunStats {
            casts,
            rarity_counts: counts,
            total_value: value,
            total_size_cm: casts * 40,
            total_ticks_to_catch: casts * 20,
            final_level: 3,
            final_coins: 150 + value,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_runs_aggregates() {
        let report = SimReport::from_runs(
            vec![run(10, [6, 2, 1, 1], 300), run(10, [8, 2, 0, 0], 100)],
            &SimConfig::default(),
        );
        assert_eq!(report.total_casts, 20);
        assert_eq!(report.rarity_counts, [14, 4, 1, 1]);
        assert_eq!(report.avg_value, 20.0);
        assert_eq!(report.avg_size_cm, 40.0);
        assert_eq!(report.avg_ticks_to_catch, 20.0);
        assert_eq!(report.avg_final_coins, 350.0);
        assert_eq!(report.rarity_share["common"], 0.7);
        assert_eq!(report.rarity_share["legendary"], 0.05);
        assert_eq!(
            report.rarity_share.keys().collect::<Vec<_>>(),
            vec!["common", "epic", "legendary", "rare"]
        );
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), &SimConfig::default());
        assert_eq!(report.total_casts, 0);
        assert_eq!(report.avg_value, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = SimReport::from_runs(vec![run(4, [4, 0, 0, 0], 40)], &SimConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_casts"], 4);
        assert_eq!(json["location_id"], "pond");
        assert!(report.summary_line().starts_with("casts=4 common=4"));
    }
}
