//! Rule-based quality prediction from process parameters

use crate::models::{QualityParams, QualityPrediction};
use crate::noise::NoiseSource;
use crate::stats::round2;

/// Predict quality score and defect probability for process parameters
///
/// Starts from a 95 baseline and applies independent penalties. The two
/// temperature checks are cumulative: a temperature outside both [35, 50]
/// and [30, 55] takes both penalties. Experienced operators recover up to
/// 10 points. The final score is clamped to [60, 100] and the defect
/// probability is its exact complement.
pub fn predict_quality(
    params: &QualityParams,
    accuracy: f64,
    noise: &mut dyn NoiseSource,
) -> QualityPrediction {
    let mut quality_score = 95.0;

    if params.temperature < 35.0 || params.temperature > 50.0 {
        quality_score -= 10.0;
    }
    if params.temperature < 30.0 || params.temperature > 55.0 {
        quality_score -= 15.0;
    }

    if params.pressure < 40.0 || params.pressure > 60.0 {
        quality_score -= 8.0;
    }

    quality_score += params.material_grade.penalty();
    quality_score += (params.operator_experience - 3.0).min(10.0);

    quality_score = (quality_score + noise.uniform(-2.5, 2.5)).clamp(60.0, 100.0);
    let quality_score = round2(quality_score);
    let defect_probability = round2(100.0 - quality_score);

    QualityPrediction {
        quality_score,
        defect_probability,
        confidence: accuracy * 100.0,
        factors: *params,
    }
}
