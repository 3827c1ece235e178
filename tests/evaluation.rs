use extract_eval::{
    bag_of_words, calculate_edit_distance, evaluate_batch, BagComparison, EditDistance,
    EditDistanceScorer, EditMeasure, EditWeights, EvaluationConfig, ReturnAs, TextMetricError,
    TextPair,
};

const SOURCE: &str = "I like pizza. I like bagels.";

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn score(output: &str, source: &str) -> f64 {
    calculate_edit_distance(output, source, EditWeights::default(), "score")
        .unwrap()
        .as_f64()
}

fn distance(output: &str, source: &str, weights: EditWeights) -> usize {
    match calculate_edit_distance(output, source, weights, "distance").unwrap() {
        EditMeasure::Distance(d) => d,
        other => panic!("expected a distance, got {other:?}"),
    }
}

#[test]
fn test_reference_sentence_scores() {
    let spaced = SOURCE
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let no_space = SOURCE.replace(' ', "");

    assert_eq!(round2(score(SOURCE, SOURCE)), 1.0);
    assert_eq!(round2(score("I like p i z z a . I like bagles.", SOURCE)), 0.75);
    assert_eq!(round2(score(&spaced, SOURCE)), 0.39);
    assert_eq!(round2(score(&no_space, SOURCE)), 0.64);
    assert_eq!(round2(score("I like pizza.", SOURCE)), 0.0);
    assert_eq!(round2(score("I like pizza. I like .", SOURCE)), 0.57);
    assert_eq!(round2(score("I like pizza. I like beagles.", SOURCE)), 0.89);
    assert_eq!(round2(score("I like pizza pizza. I like bagels.", SOURCE)), 0.79);
}

#[test]
fn test_identity_scores_one() {
    for text in ["a", "hello world", "日本語のテキスト", SOURCE] {
        assert_eq!(score(text, text), 1.0);
        assert_eq!(distance(text, text, EditWeights::default()), 0);
    }
}

#[test]
fn test_swapping_arguments_with_asymmetric_weights() {
    let weights = EditWeights::default();
    // output shorter than source: the gap is paid as insertions
    assert_eq!(distance("I like pizza.", SOURCE, weights), 30);
    // swapped: the same gap is paid as deletions
    assert_eq!(distance(SOURCE, "I like pizza.", weights), 15);

    let uniform = EditWeights::uniform();
    assert_eq!(
        distance("I like pizza.", SOURCE, uniform),
        distance(SOURCE, "I like pizza.", uniform)
    );
}

#[test]
fn test_bounded_outputs() {
    let samples = ["", "a", "abc", "completely different text", SOURCE, "x x x x x x x x"];
    for output in samples {
        for source in samples {
            let s = score(output, source);
            assert!((0.0..=1.0).contains(&s), "score {s} out of range");
        }
    }
}

#[test]
fn test_monotonic_degradation() {
    let scorer = EditDistanceScorer::new();
    let source: Vec<char> = SOURCE.chars().collect();
    let mut previous = 1.0;
    for corrupted in 0..=source.len() {
        let output: String = source
            .iter()
            .enumerate()
            .map(|(i, &c)| if i < corrupted { '#' } else { c })
            .collect();
        let s = scorer.score(&output, SOURCE);
        assert!(s <= previous, "score rose from {previous} to {s}");
        previous = s;
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn test_invalid_mode_is_rejected() {
    let err = calculate_edit_distance("a", "b", EditWeights::default(), "bogus").unwrap_err();
    match err {
        TextMetricError::InvalidArgument { value, expected } => {
            assert_eq!(value, "bogus");
            assert_eq!(expected, ReturnAs::VARIANTS);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bag_of_words_examples() {
    let bow = bag_of_words("Hello my name is H a r p e r, what's your name?");
    assert_eq!(bow.len(), 6);
    assert_eq!(bow["name"], 2);
    assert!(!bow.contains_key("h"));

    let bow = bag_of_words("I have a dog and a cat, I love my dog.");
    assert_eq!(bow["i"], 2);
    assert_eq!(bow["a"], 2);
    assert_eq!(bow["dog"], 2);
    assert_eq!(bow.values().sum::<usize>(), 11);
}

#[test]
fn test_word_level_comparison() {
    let source = bag_of_words("The dog loved the cat, but the cat loved the cow");
    let output = bag_of_words("The dog loved the c a t, but the cat loved the cow");
    let cmp = BagComparison::from_bags(&output, &source);
    assert_eq!(cmp.source_total, 11);
    assert_eq!(cmp.output_total, 10);
    assert_eq!(cmp.matched, 10);
    let missing: Vec<_> = cmp.missing.iter().map(|d| (d.word.as_str(), d.count)).collect();
    assert_eq!(missing, vec![("cat", 1)]);
    assert_eq!(cmp.precision(), 1.0);
    assert_eq!(cmp.recall(), 10.0 / 11.0);
}

#[test]
fn test_batch_report_serializes() {
    let pairs = vec![
        TextPair::new(SOURCE, SOURCE),
        TextPair::new("I like p i z z a . I like bagles.", SOURCE),
    ];
    let reports = evaluate_batch(&pairs, &EvaluationConfig::default());
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].score, 1.0);
    assert_eq!(round2(reports[1].score), 0.75);

    let json = serde_json::to_value(&reports[1]).unwrap();
    assert_eq!(json["distance"], 7);
    assert_eq!(json["source_len"], 28);
    assert!(json["words"]["missing"].is_array());
}
