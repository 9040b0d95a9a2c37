use std::path::Path;

use crate::error::Result;
use crate::models::DailyStats;
use crate::scoring::Tier;

/// Write per-day stats to a CSV file, one row per day.
pub fn write_week_csv(stats: &[&DailyStats], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["date", "meals", "total_points", "final_points", "total_spent"];
    header.extend(Tier::ALL.iter().map(|t| t.key()));
    wtr.write_record(&header)?;

    for day in stats {
        let mut record = vec![
            day.date.to_string(),
            day.meal_count.to_string(),
            day.total_points.to_string(),
            day.final_points().to_string(),
            format!("{:.2}", day.total_spent),
        ];
        record.extend(Tier::ALL.iter().map(|t| day.tier_count(*t).to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
