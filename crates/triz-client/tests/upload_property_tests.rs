use proptest::prelude::*;
use triz_client::upload::{sniff_mime, PDF_MIME};
use triz_client::wire::ApiPrinciple;
use triz_client::{UploadCandidate, UploadError, UploadPolicy};

proptest! {
    #[test]
    fn size_limit_is_inclusive(max in 1u64..10_000, size in 0u64..20_000) {
        let policy = UploadPolicy { max_bytes: max, ..UploadPolicy::default() };
        let candidate = UploadCandidate {
            file_name: "p.pdf".to_string(),
            mime_type: PDF_MIME.to_string(),
            size_bytes: size,
        };
        let result = policy.validate(&candidate);
        if size <= max {
            prop_assert!(result.is_ok());
        } else {
            let too_large = matches!(result, Err(UploadError::TooLarge { .. }));
            prop_assert!(too_large);
        }
    }

    #[test]
    fn pdf_magic_wins_over_extension(name in "[a-z]{1,8}\\.(txt|png|bin|doc)", tail in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut head = b"%PDF-".to_vec();
        head.extend(tail);
        prop_assert_eq!(sniff_mime(&name, &head), PDF_MIME);
    }

    #[test]
    fn string_examples_normalize_to_trimmed_lines(lines in proptest::collection::vec("[A-Za-z ]{0,12}", 0..6)) {
        let body = serde_json::json!({
            "id": 1, "number": 1, "name": "Segmentation",
            "examples": lines.join("\n"),
        });
        let principle: ApiPrinciple = serde_json::from_value(body).unwrap();
        let expected: Vec<String> = lines
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        prop_assert_eq!(principle.examples, expected);
    }
}
