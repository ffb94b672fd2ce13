#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use test_mapper::corpus::types::{Corpus, Framework, TestClass};
    use test_mapper::report::pairer::pair_corpora;
    use test_mapper::report::types::ConversionStatus;

    fn class(framework: Framework, name: &str, file: &str, methods: &[&str]) -> TestClass {
        let mut class = TestClass::new(name, PathBuf::from(file), framework);
        class.test_methods = methods.iter().map(|m| m.to_string()).collect();
        class
    }

    fn corpus(framework: Framework, classes: Vec<TestClass>) -> Corpus {
        let mut corpus = Corpus::empty(framework);
        corpus.stats.total_files = classes.len();
        corpus.stats.total_classes = classes.len();
        corpus.classes = classes;
        corpus
    }

    #[test]
    fn test_every_class_lands_in_exactly_one_mapping() {
        let swift = corpus(
            Framework::Swift,
            vec![
                class(Framework::Swift, "AccountTests", "AccountTests.swift", &["testDeposit"]),
                class(Framework::Swift, "WalletTests", "WalletTests.swift", &["testCreate"]),
                class(Framework::Swift, "LedgerTests", "LedgerTests.swift", &["testAppend"]),
            ],
        );
        let csharp = corpus(
            Framework::CSharp,
            vec![
                class(Framework::CSharp, "AccountTests", "AccountTests.cs", &["testDeposit"]),
                class(Framework::CSharp, "HelperTests", "HelperTests.cs", &["TestSetup"]),
                class(Framework::CSharp, "WalletTest", "WalletTest.cs", &["testCreate"]),
            ],
        );

        let mappings = pair_corpora(&swift, &csharp);

        assert_eq!(mappings.len(), 4, "3 Swift classes plus 1 leftover C# class");

        let swift_sides: Vec<&PathBuf> =
            mappings.iter().filter_map(|m| m.swift_file.as_ref()).collect();
        let csharp_sides: Vec<&PathBuf> =
            mappings.iter().filter_map(|m| m.csharp_file.as_ref()).collect();

        assert_eq!(
            swift_sides.len(),
            3,
            "Every Swift class should appear in exactly one mapping"
        );
        assert_eq!(
            csharp_sides.len(),
            3,
            "Every C# class should appear in exactly one mapping"
        );

        // Swift scan order first, then leftover C# classes
        assert_eq!(mappings[0].swift_file, Some(PathBuf::from("AccountTests.swift")));
        assert_eq!(mappings[1].swift_file, Some(PathBuf::from("WalletTests.swift")));
        assert_eq!(mappings[2].swift_file, Some(PathBuf::from("LedgerTests.swift")));
        assert_eq!(mappings[3].csharp_file, Some(PathBuf::from("HelperTests.cs")));
        assert_eq!(mappings[3].status(), ConversionStatus::ExtraCSharp);
    }

    #[test]
    fn test_exact_name_match_beats_normalized_match() {
        let swift = corpus(
            Framework::Swift,
            vec![class(Framework::Swift, "AccountTests", "AccountTests.swift", &["testDeposit"])],
        );
        // The near-miss name comes first, the exact one second
        let csharp = corpus(
            Framework::CSharp,
            vec![
                class(Framework::CSharp, "AccountTest", "AccountTest.cs", &["testDeposit"]),
                class(Framework::CSharp, "AccountTests", "AccountTests.cs", &["testDeposit"]),
            ],
        );

        let mappings = pair_corpora(&swift, &csharp);

        assert_eq!(
            mappings[0].csharp_file,
            Some(PathBuf::from("AccountTests.cs")),
            "Exact name should win even when a normalized candidate comes first"
        );
        assert_eq!(mappings[1].status(), ConversionStatus::ExtraCSharp);
        assert_eq!(mappings[1].csharp_file, Some(PathBuf::from("AccountTest.cs")));
    }

    #[test]
    fn test_normalized_match_ignores_case_and_suffix() {
        let swift = corpus(
            Framework::Swift,
            vec![class(Framework::Swift, "WalletTests", "WalletTests.swift", &["testCreate"])],
        );
        let csharp = corpus(
            Framework::CSharp,
            vec![class(Framework::CSharp, "walletTest", "walletTest.cs", &["testCreate"])],
        );

        let mappings = pair_corpora(&swift, &csharp);

        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].csharp_file, Some(PathBuf::from("walletTest.cs")));
        assert_eq!(mappings[0].status(), ConversionStatus::FullyConverted);
    }

    #[test]
    fn test_normalized_pair_still_reports_missing_methods() {
        let swift = corpus(
            Framework::Swift,
            vec![class(
                Framework::Swift,
                "AccountTests",
                "AccountTests.swift",
                &["testCreate", "testSign"],
            )],
        );
        let csharp = corpus(
            Framework::CSharp,
            vec![class(Framework::CSharp, "AccountTest", "AccountTest.cs", &["testCreate"])],
        );

        let mappings = pair_corpora(&swift, &csharp);

        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].csharp_file, Some(PathBuf::from("AccountTest.cs")));
        assert_eq!(mappings[0].missing_tests, vec!["testSign"]);
        assert_eq!(mappings[0].conversion_rate, 50.0);
        assert_eq!(mappings[0].status(), ConversionStatus::PartiallyConverted);
    }

    #[test]
    fn test_csharp_class_is_consumed_at_most_once() {
        // Both Swift names normalize to "account"
        let swift = corpus(
            Framework::Swift,
            vec![
                class(Framework::Swift, "AccountTests", "AccountTests.swift", &["testDeposit"]),
                class(Framework::Swift, "AccountTest", "AccountTest.swift", &["testWithdraw"]),
            ],
        );
        let csharp = corpus(
            Framework::CSharp,
            vec![class(Framework::CSharp, "accounttests", "AccountTests.cs", &["testDeposit"])],
        );

        let mappings = pair_corpora(&swift, &csharp);

        assert_eq!(mappings.len(), 2);
        assert_eq!(
            mappings[0].csharp_file,
            Some(PathBuf::from("AccountTests.cs")),
            "First Swift class in scan order should claim the C# class"
        );
        assert_eq!(
            mappings[1].status(),
            ConversionStatus::MissingConversion,
            "A consumed C# class should not pair again"
        );
    }

    #[test]
    fn test_first_normalized_candidate_wins() {
        let swift = corpus(
            Framework::Swift,
            vec![class(Framework::Swift, "WalletTests", "WalletTests.swift", &["testCreate"])],
        );
        // Both candidates normalize to "wallet"
        let csharp = corpus(
            Framework::CSharp,
            vec![
                class(Framework::CSharp, "WALLETTEST", "WALLETTEST.cs", &["testCreate"]),
                class(Framework::CSharp, "WalletTest", "WalletTest.cs", &["testCreate"]),
            ],
        );

        let mappings = pair_corpora(&swift, &csharp);

        assert_eq!(mappings[0].csharp_file, Some(PathBuf::from("WALLETTEST.cs")));
        assert_eq!(mappings[1].status(), ConversionStatus::ExtraCSharp);
        assert_eq!(mappings[1].csharp_file, Some(PathBuf::from("WalletTest.cs")));
    }

    #[test]
    fn test_empty_csharp_corpus_maps_everything_as_missing() {
        let swift = corpus(
            Framework::Swift,
            vec![
                class(Framework::Swift, "AccountTests", "AccountTests.swift", &["testDeposit"]),
                class(Framework::Swift, "WalletTests", "WalletTests.swift", &["testCreate"]),
            ],
        );
        let csharp = Corpus::empty(Framework::CSharp);

        let mappings = pair_corpora(&swift, &csharp);

        assert_eq!(mappings.len(), 2);
        assert!(mappings
            .iter()
            .all(|m| m.status() == ConversionStatus::MissingConversion));
    }
}
