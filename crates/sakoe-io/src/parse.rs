//! Line parser: `<label> <v1> <v2> ... <vk>`.

use sakoe_dtw::{DtwError, MultiChannelSeries, TimeSeries};
use sakoe_knn::{ClassLabel, Dimensionality, LabeledSeries};

use crate::error::ParseError;

/// Parse one corpus line into a labeled series.
///
/// The first whitespace-separated token is the label; the rest are real
/// numbers. For [`Dimensionality::Multivariate`] the values are
/// de-interleaved into channels by the layout.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`ParseError::MissingValues`] | Fewer than two tokens, or no whole channel tuple |
/// | [`ParseError::InvalidNumber`] | A value token is not a number |
/// | [`ParseError::NonFinite`] | A value token is NaN or infinite |
/// | [`ParseError::PartialGroup`] | Values do not fill whole tuples and the layout rejects the remainder |
pub fn parse_line(line: &str, dimensionality: Dimensionality) -> Result<LabeledSeries, ParseError> {
    let mut tokens = line.split_whitespace();
    let (Some(label), Some(first)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::MissingValues {
            tokens: line.split_whitespace().count(),
        });
    };

    let values = std::iter::once(first)
        .chain(tokens)
        .enumerate()
        .map(|(position, raw)| parse_value(position, raw))
        .collect::<Result<Vec<f64>, _>>()?;

    let label = ClassLabel::new(label).map_err(|_| ParseError::MissingValues { tokens: 0 })?;

    match dimensionality {
        Dimensionality::Univariate => {
            let series = TimeSeries::new(values).map_err(ParseError::Series)?;
            Ok(LabeledSeries::new(label, series))
        }
        Dimensionality::Multivariate(layout) => {
            let n_values = values.len();
            let series =
                MultiChannelSeries::from_interleaved(&values, layout).map_err(|e| match e {
                    DtwError::PartialChannelGroup { len, n_channels } => ParseError::PartialGroup {
                        values: len,
                        n_channels,
                    },
                    DtwError::EmptySeries => ParseError::MissingValues {
                        tokens: n_values + 1,
                    },
                    other => ParseError::Series(other),
                })?;
            Ok(LabeledSeries::new(label, series))
        }
    }
}

fn parse_value(position: usize, raw: &str) -> Result<f64, ParseError> {
    let value: f64 = raw.parse().map_err(|_| ParseError::InvalidNumber {
        position,
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            position,
            raw: raw.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakoe_dtw::{ChannelLayout, Remainder};
    use sakoe_knn::SeriesData;

    fn triads() -> Dimensionality {
        Dimensionality::Multivariate(ChannelLayout::default())
    }

    #[test]
    fn parses_label_and_values() {
        let s = parse_line("A 1 2 3 4", Dimensionality::Univariate).unwrap();
        assert_eq!(s.label().as_str(), "A");
        let SeriesData::Univariate(series) = s.data() else {
            panic!("expected univariate data");
        };
        assert_eq!(series.as_ref(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn tolerates_extra_whitespace_and_exponents() {
        let s = parse_line("  -1\t2.5e-1   -3.0  \r", Dimensionality::Univariate).unwrap();
        assert_eq!(s.label().as_str(), "-1");
        assert_eq!(s.data().len(), 2);
    }

    #[test]
    fn label_only_line_is_rejected() {
        assert_eq!(
            parse_line("A", Dimensionality::Univariate).unwrap_err(),
            ParseError::MissingValues { tokens: 1 }
        );
        assert_eq!(
            parse_line("", Dimensionality::Univariate).unwrap_err(),
            ParseError::MissingValues { tokens: 0 }
        );
    }

    #[test]
    fn non_numeric_token_is_rejected() {
        assert_eq!(
            parse_line("A 1.0 two 3.0", Dimensionality::Univariate).unwrap_err(),
            ParseError::InvalidNumber {
                position: 1,
                raw: "two".into()
            }
        );
    }

    #[test]
    fn non_finite_token_is_rejected() {
        assert!(matches!(
            parse_line("A 1.0 NaN", Dimensionality::Univariate),
            Err(ParseError::NonFinite { position: 1, .. })
        ));
        assert!(matches!(
            parse_line("A inf 1.0", Dimensionality::Univariate),
            Err(ParseError::NonFinite { position: 0, .. })
        ));
    }

    #[test]
    fn triads_are_transposed() {
        let s = parse_line("walk 1 10 100 2 20 200", triads()).unwrap();
        let SeriesData::Multivariate(series) = s.data() else {
            panic!("expected multivariate data");
        };
        assert_eq!(series.channel(1).unwrap().as_slice(), &[10.0, 20.0]);
    }

    #[test]
    fn partial_triad_rejected_by_default() {
        assert_eq!(
            parse_line("walk 1 2 3 4", triads()).unwrap_err(),
            ParseError::PartialGroup {
                values: 4,
                n_channels: 3
            }
        );
    }

    #[test]
    fn partial_triad_truncated_when_configured() {
        let layout = ChannelLayout::default().with_remainder(Remainder::Truncate);
        let s = parse_line("walk 1 2 3 4 5", Dimensionality::Multivariate(layout)).unwrap();
        assert_eq!(s.data().len(), 1);

        let err = parse_line("walk 1 2", Dimensionality::Multivariate(layout)).unwrap_err();
        assert_eq!(err, ParseError::MissingValues { tokens: 3 });
    }
}
