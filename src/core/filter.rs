// PresetScrub - core/filter.rs
//
// Order-preserving line filter.
// The output is always a subsequence of the input: retained lines are
// never edited, reordered, or joined.

use crate::core::rules::ExclusionRules;

/// A line dropped by the filter, with its 1-based position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedLine<'a> {
    pub line_number: usize,
    pub text: &'a str,
}

/// Keep the lines that match no exclusion rule, in original order.
pub fn filter_lines(lines: &[String], rules: &ExclusionRules) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !rules.should_exclude(line))
        .cloned()
        .collect()
}

/// The complement of [`filter_lines`]: every line it drops, and where.
pub fn removed_lines<'a>(lines: &'a [String], rules: &ExclusionRules) -> Vec<RemovedLine<'a>> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| rules.should_exclude(line))
        .map(|(idx, line)| RemovedLine {
            line_number: idx + 1,
            text: line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    /// True if `sub` appears in `full` in the same relative order.
    fn is_subsequence(sub: &[String], full: &[String]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == s))
    }

    fn sample() -> Vec<String> {
        doc(&[
            "struct Preset {\n",
            "   // Dynamic Grid\n",
            "   bool grid_dynamic_enabled;\n",
            "   int  grid_warm_levels;\n",
            "   double max_spread_pips;\n",
            "   // Trend Filter settings below\n",
            "   bool trend_filter_enabled;\n",
            "   int  trend_ema_period;\n",
            "   int  magic_number;\n",
            "};\n",
        ])
    }

    #[test]
    fn test_filter_removes_matching_lines_in_order() {
        let rules = ExclusionRules::deprecated_preset_params();
        let out = filter_lines(&sample(), &rules);
        assert_eq!(
            out,
            doc(&[
                "struct Preset {\n",
                "   double max_spread_pips;\n",
                "   int  magic_number;\n",
                "};\n",
            ])
        );
        assert!(is_subsequence(&out, &sample()));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rules = ExclusionRules::deprecated_preset_params();
        let once = filter_lines(&sample(), &rules);
        let twice = filter_lines(&once, &rules);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_removed_iff_rule_substring_present() {
        let rules = ExclusionRules::deprecated_preset_params();
        let input = sample();
        let out = filter_lines(&input, &rules);
        for line in &input {
            let has_rule = rules
                .tokens()
                .iter()
                .chain(rules.phrases())
                .any(|r| line.contains(r.as_str()));
            assert_eq!(!out.contains(line), has_rule, "line {line:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        let rules = ExclusionRules::deprecated_preset_params();
        assert!(filter_lines(&[], &rules).is_empty());
    }

    #[test]
    fn test_all_lines_excluded() {
        let rules = ExclusionRules::deprecated_preset_params();
        let input = doc(&["grid_refill_batch=3\n", "// Grid Protection\n"]);
        assert!(filter_lines(&input, &rules).is_empty());
    }

    #[test]
    fn test_retained_lines_keep_whitespace_and_terminators() {
        let rules = ExclusionRules::deprecated_preset_params();
        let input = doc(&["  a = 1 \r\n", "trend_action=1\r\n", "\t\n", "tail"]);
        assert_eq!(
            filter_lines(&input, &rules),
            doc(&["  a = 1 \r\n", "\t\n", "tail"])
        );
    }

    #[test]
    fn test_removed_lines_report_line_numbers() {
        let rules = ExclusionRules::deprecated_preset_params();
        let input = sample();
        let removed = removed_lines(&input, &rules);
        let numbers: Vec<usize> = removed.iter().map(|r| r.line_number).collect();
        assert_eq!(numbers, vec![2, 3, 4, 6, 7, 8]);
        assert_eq!(removed[0].text, "   // Dynamic Grid\n");
        assert_eq!(
            removed.len() + filter_lines(&input, &rules).len(),
            input.len()
        );
    }

    #[test]
    fn test_substituted_rules() {
        let rules = ExclusionRules::new(["magic"], ["struct"]);
        let out = filter_lines(&sample(), &rules);
        assert_eq!(out.len(), sample().len() - 2);
        assert!(!out.iter().any(|l| l.contains("magic") || l.contains("struct")));
    }
}
