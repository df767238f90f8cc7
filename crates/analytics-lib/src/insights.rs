//! Insight construction and trigger thresholds
//!
//! Each category fires when its derived metric crosses a fixed threshold;
//! the engine evaluates the triggers in priority order and skips categories
//! whose condition is false.

use crate::models::{Impact, Insight, InsightKind};

/// Optimization insight fires when mean forecast efficiency drops below this
pub const OPTIMIZATION_EFFICIENCY_THRESHOLD: f64 = 85.0;

/// Maintenance insight fires when failure probability exceeds this
pub const MAINTENANCE_PROBABILITY_THRESHOLD: f64 = 70.0;

/// Quality insight fires when defect probability exceeds this
pub const DEFECT_PROBABILITY_THRESHOLD: f64 = 10.0;

/// Demand insight fires when mean forecast demand exceeds this
pub const DEMAND_SURGE_THRESHOLD: f64 = 120.0;

/// Low average efficiency over the forecast horizon
pub fn optimization_insight(avg_efficiency: f64, confidence: f64) -> Insight {
    Insight {
        id: 1,
        kind: InsightKind::Optimization,
        title: "Schedule Optimization Opportunity".to_string(),
        description: format!(
            "Model predicts {:.1}% efficiency. Rescheduling could improve by 15%.",
            avg_efficiency
        ),
        impact: Impact::High,
        confidence,
        icon: "TrendingUp".to_string(),
    }
}

/// Elevated failure probability on the watched machine
pub fn maintenance_insight(
    machine_id: &str,
    probability: f64,
    days_until: u32,
    confidence: f64,
) -> Insight {
    Insight {
        id: 2,
        kind: InsightKind::Maintenance,
        title: "Predictive Maintenance Alert".to_string(),
        description: format!(
            "{} showing {:.1}% probability of failure within {} days.",
            machine_id, probability, days_until
        ),
        impact: Impact::Critical,
        confidence,
        icon: "AlertTriangle".to_string(),
    }
}

/// Elevated defect probability under current process parameters
pub fn quality_insight(defect_probability: f64, confidence: f64) -> Insight {
    Insight {
        id: 3,
        kind: InsightKind::Quality,
        title: "Quality Risk Detection".to_string(),
        description: format!(
            "Current process parameters indicate {:.1}% defect probability.",
            defect_probability
        ),
        impact: Impact::Medium,
        confidence,
        icon: "Lightbulb".to_string(),
    }
}

/// Forecast demand running above baseline
pub fn demand_insight(product: &str, avg_demand: f64, base_demand: f64, confidence: f64) -> Insight {
    let increase_pct = (avg_demand - base_demand) / base_demand * 100.0;
    Insight {
        id: 4,
        kind: InsightKind::Demand,
        title: "Demand Surge Prediction".to_string(),
        description: format!(
            "Forecast shows {:.0}% increase in {} demand next week.",
            increase_pct,
            product.replace('_', " ")
        ),
        impact: Impact::Medium,
        confidence,
        icon: "TrendingUp".to_string(),
    }
}
