//! Property-based tests for the pure parsing stages

use osh::{History, Pipeline, Recall, resolve_redirection, segment, split_pipeline, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_text_without_pipe_is_single(s in "[^|]*") {
        prop_assert_eq!(split_pipeline(&s), Pipeline::Single(s.as_str()));
    }

    #[test]
    fn test_one_pipe_splits_and_trims_right(
        left in "[^|]*",
        right in "[^|]*",
    ) {
        let command = format!("{}|{}", left, right);
        prop_assert_eq!(
            split_pipeline(&command),
            Pipeline::Piped(left.as_str(), right.trim_start())
        );
    }

    #[test]
    fn test_tokens_are_never_empty_or_delimited(s in "[a-z &\t\n<>|]{0,40}") {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert!(token != "&");
            prop_assert!(!token.contains([' ', '\t', '\n']));
        }
    }

    #[test]
    fn test_tokenize_rejoins_to_same_words(words in prop::collection::vec("[a-z0-9.-]{1,8}", 0..8)) {
        let line = words.join(" \t ");
        prop_assert_eq!(tokenize(&line), words);
    }

    #[test]
    fn test_redirection_never_grows_vector(
        args in prop::collection::vec(prop_oneof!["<", ">", "[a-z]{1,5}"], 0..10),
    ) {
        let before = args.len();
        let (rest, redirection) = resolve_redirection(args);
        let consumed = redirection.input.is_some() as usize + redirection.output.is_some() as usize;
        prop_assert!(rest.len() + 2 * consumed <= before);
    }

    #[test]
    fn test_recall_reproduces_segmentation(line in "[a-z ;&|<>]{1,40}") {
        prop_assume!(line != "!!");
        let mut history = History::new();
        let original = segment(&line, &mut history);
        let replayed = segment("!!", &mut history);

        prop_assert_eq!(replayed.recall, Recall::Replayed(line.clone()));
        prop_assert_eq!(replayed.segments, original.segments);
        prop_assert_eq!(history.last(), Some(line.as_str()));
    }

    #[test]
    fn test_segments_are_trimmed_and_non_empty(line in "[a-z \t;&]{0,40}") {
        let mut history = History::new();
        for seg in segment(&line, &mut history).segments {
            prop_assert!(!seg.text.is_empty());
            prop_assert_eq!(seg.text.trim_matches([' ', '\t']), seg.text.as_str());
            prop_assert!(!seg.text.contains(';'));
        }
    }
}
