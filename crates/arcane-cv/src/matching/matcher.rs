//! Linear-scan nearest neighbour

use super::MatchResult;
use crate::error::CvError;
use crate::traits::DistanceMetric;
use crate::Result;

/// Find the candidate closest to `query`.
///
/// With `restrict_to`, only the listed indices are visited, in list order;
/// otherwise every candidate is. Ties keep the first index visited. An empty
/// candidate set yields [`MatchResult::unknown`].
pub fn nearest<T, M>(query: &T, candidates: &[T], metric: &M, restrict_to: Option<&[usize]>) -> Result<MatchResult>
where
    T: Sync,
    M: DistanceMetric<T> + Sync,
{
    match restrict_to {
        Some(indices) => {
            if let Some(&index) = indices.iter().find(|&&index| index >= candidates.len()) {
                return Err(CvError::CandidateOutOfRange {
                    index,
                    len: candidates.len(),
                });
            }
            scan(query, candidates, metric, indices.iter().copied())
        }
        None => scan(query, candidates, metric, 0..candidates.len()),
    }
}

#[cfg(not(feature = "parallel"))]
fn scan<T, M>(query: &T, candidates: &[T], metric: &M, order: impl Iterator<Item = usize>) -> Result<MatchResult>
where
    M: DistanceMetric<T>,
{
    let mut best = MatchResult::unknown();
    for index in order {
        let distance = metric.distance(query, &candidates[index])?;
        best.offer(index, distance);
    }
    Ok(best)
}

#[cfg(feature = "parallel")]
fn scan<T, M>(query: &T, candidates: &[T], metric: &M, order: impl Iterator<Item = usize>) -> Result<MatchResult>
where
    T: Sync,
    M: DistanceMetric<T> + Sync,
{
    use rayon::prelude::*;

    let order: Vec<usize> = order.collect();
    let distances = order
        .par_iter()
        .map(|&index| metric.distance(query, &candidates[index]))
        .collect::<Result<Vec<f64>>>()?;

    // Reduce sequentially so the tie-break matches the serial scan
    let mut best = MatchResult::unknown();
    for (index, distance) in order.into_iter().zip(distances) {
        best.offer(index, distance);
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{Hamming, Metric};
    use arcane_core::FeatureVector;

    fn fv(values: &[f64]) -> FeatureVector {
        FeatureVector::new(values.to_vec())
    }

    #[test]
    fn test_tie_break_keeps_lowest_index() -> Result<()> {
        let v = fv(&[1.0, 2.0, 3.0]);
        let candidates = vec![v.clone(), v.clone()];

        let result = nearest(&v, &candidates, &Metric::Euclidean, None)?;
        assert_eq!(result.index, Some(0));
        assert_eq!(result.distance, 0.0);
        Ok(())
    }

    #[test]
    fn test_empty_candidates() -> Result<()> {
        let query = fv(&[1.0]);
        let candidates: Vec<FeatureVector> = Vec::new();

        let result = nearest(&query, &candidates, &Metric::Euclidean, None)?;
        assert!(result.is_unknown());
        assert_eq!(result.distance, f64::INFINITY);

        let candidates = vec![fv(&[1.0])];
        let result = nearest(&query, &candidates, &Metric::Euclidean, Some(&[][..]))?;
        assert!(result.is_unknown());
        assert_eq!(result.distance, f64::INFINITY);
        Ok(())
    }

    #[test]
    fn test_restricted_scan() -> Result<()> {
        let candidates = vec![fv(&[0.0]), fv(&[10.0]), fv(&[4.0]), fv(&[5.0])];
        let query = fv(&[0.0]);

        let result = nearest(&query, &candidates, &Metric::Euclidean, Some(&[3, 1, 2][..]))?;
        assert_eq!(result.index, Some(2));
        assert_eq!(result.distance, 16.0);

        let result = nearest(&query, &candidates, &Metric::Manhattan, None)?;
        assert_eq!(result.index, Some(0));
        Ok(())
    }

    #[test]
    fn test_restricted_ties_follow_list_order() -> Result<()> {
        let candidates = vec![fv(&[1.0]), fv(&[1.0]), fv(&[1.0])];
        let result = nearest(&fv(&[0.0]), &candidates, &Metric::Euclidean, Some(&[2, 0, 1][..]))?;
        assert_eq!(result.index, Some(2));
        Ok(())
    }

    #[test]
    fn test_out_of_range_restriction() {
        let candidates = vec![fv(&[0.0])];
        let err = nearest(&fv(&[0.0]), &candidates, &Metric::Euclidean, Some(&[0, 4][..])).unwrap_err();
        assert_eq!(err, CvError::CandidateOutOfRange { index: 4, len: 1 });
    }

    #[test]
    fn test_dimension_mismatch_propagates() {
        let candidates = vec![fv(&[0.0, 1.0])];
        let err = nearest(&fv(&[0.0]), &candidates, &Metric::Euclidean, None).unwrap_err();
        assert!(matches!(err, CvError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_hamming_signatures() -> Result<()> {
        let candidates = vec![0xFFFF_0000_u64, 0x0000_FFFF, 0x0000_FFF0];
        let result = nearest(&0x0000_FFF1_u64, &candidates, &Hamming, None)?;
        assert_eq!(result.index, Some(2));
        assert_eq!(result.distance, 1.0);
        Ok(())
    }
}
