//! Simulation report generation.

use super::runner::RunRecord;
use crate::campaign::Ending;
use std::fmt::Write;

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    /// Deaths indexed by level (index 0 unused).
    pub defeats_by_level: Vec<u32>,

    pub avg_final_level: f64,
    pub avg_battles: f64,
    pub avg_potions_found: f64,
    pub avg_potions_drunk: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_taken: f64,
    /// Average HP fraction of survivors at the end, 0..=1.
    pub avg_survivor_hp_fraction: f64,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunRecord>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = f64::from(num_runs.max(1));

        let mut victories = 0u32;
        let mut defeats_by_level = vec![0u32; 3];
        for run in &runs {
            match run.ending {
                Ending::Victory => victories += 1,
                Ending::Defeat { level } => {
                    let index = (level as usize).min(defeats_by_level.len() - 1);
                    defeats_by_level[index] += 1;
                }
                Ending::Retired { .. } => {}
            }
        }

        let avg_final_level =
            runs.iter().map(|r| f64::from(r.final_level)).sum::<f64>() / denom;
        let avg_battles = runs.iter().map(|r| f64::from(r.battles)).sum::<f64>() / denom;
        let avg_potions_found =
            runs.iter().map(|r| f64::from(r.potions_found)).sum::<f64>() / denom;
        let avg_potions_drunk =
            runs.iter().map(|r| f64::from(r.potions_drunk)).sum::<f64>() / denom;
        let avg_damage_dealt =
            runs.iter().map(|r| r.damage_dealt as f64).sum::<f64>() / denom;
        let avg_damage_taken =
            runs.iter().map(|r| r.damage_taken as f64).sum::<f64>() / denom;

        let survivors: Vec<&RunRecord> = runs
            .iter()
            .filter(|r| matches!(r.ending, Ending::Victory))
            .collect();
        let avg_survivor_hp_fraction = if survivors.is_empty() {
            0.0
        } else {
            survivors
                .iter()
                .map(|r| f64::from(r.final_hp) / f64::from(r.final_max_hp.max(1)))
                .sum::<f64>()
                / survivors.len() as f64
        };

        Self {
            num_runs,
            victories,
            defeats_by_level,
            avg_final_level,
            avg_battles,
            avg_potions_found,
            avg_potions_drunk,
            avg_damage_dealt,
            avg_damage_taken,
            avg_survivor_hp_fraction,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_runs == 0 {
            0.0
        } else {
            f64::from(self.victories) / f64::from(self.num_runs)
        }
    }

    /// Renders the report as the text block the CLI prints.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "=== SIMULATION RESULTS ===");
        let _ = writeln!(out);
        let _ = writeln!(out, "Runs:            {}", self.num_runs);
        let _ = writeln!(
            out,
            "Victories:       {} ({:.1}%)",
            self.victories,
            self.win_rate() * 100.0
        );
        for (level, deaths) in self.defeats_by_level.iter().enumerate().skip(1) {
            let _ = writeln!(out, "Deaths on L{}:    {}", level, deaths);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Avg final level: {:.2}", self.avg_final_level);
        let _ = writeln!(out, "Avg battles:     {:.2}", self.avg_battles);
        let _ = writeln!(out, "Avg potions:     {:.2} found, {:.2} drunk",
            self.avg_potions_found, self.avg_potions_drunk);
        let _ = writeln!(out, "Avg dmg dealt:   {:.1}", self.avg_damage_dealt);
        let _ = writeln!(out, "Avg dmg taken:   {:.1}", self.avg_damage_taken);
        let _ = writeln!(
            out,
            "Survivor HP:     {:.1}% of max",
            self.avg_survivor_hp_fraction * 100.0
        );

        out
    }
}
