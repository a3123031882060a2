use crate::domain::analysis::{Performer, PortfolioStats};
use crate::domain::contract::implied_roi;
use crate::domain::investment::{sector_key, Investment};
use crate::weights::UNSPECIFIED_SECTOR;
use std::cmp::Ordering;

/// Aggregate a snapshot of holdings. An empty slice yields zeroed stats.
pub fn compute_stats(investments: &[Investment]) -> PortfolioStats {
    let mut stats = PortfolioStats {
        total_count: investments.len(),
        ..Default::default()
    };

    let mut roi_sum = 0.0;
    for inv in investments {
        stats.total_value += inv.current_value;
        stats.total_initial_amount += inv.initial_amount;
        roi_sum += inv.current_roi;

        if inv.status.is_active() {
            stats.active_count += 1;
        }

        let sector = inv
            .sector
            .as_deref()
            .map(sector_key)
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| UNSPECIFIED_SECTOR.to_string());
        *stats.sector_distribution.entry(sector).or_insert(0) += 1;

        stats.risk_distribution.record(inv.risk_level);
    }

    stats.total_roi = implied_roi(stats.total_initial_amount, stats.total_value);
    if !investments.is_empty() {
        stats.average_roi = roi_sum / investments.len() as f64;
    }

    stats.best_performer = investments
        .iter()
        .reduce(|best, inv| if by_roi(inv, best) == Ordering::Greater { inv } else { best })
        .map(performer);
    stats.worst_performer = investments
        .iter()
        .reduce(|worst, inv| if by_roi(inv, worst) == Ordering::Less { inv } else { worst })
        .map(performer);

    stats
}

// First holding wins ties.
fn by_roi(a: &Investment, b: &Investment) -> Ordering {
    a.current_roi
        .partial_cmp(&b.current_roi)
        .unwrap_or(Ordering::Equal)
}

fn performer(inv: &Investment) -> Performer {
    Performer {
        id: inv.id,
        name: inv.name.clone(),
        current_roi: inv.current_roi,
    }
}
