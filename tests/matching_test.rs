//! End-to-end matching behaviour through the public API.

use faq_matcher::analysis::normalizer::Normalizer;
use faq_matcher::prelude::*;

fn catalog() -> Vec<Faq> {
    vec![
        Faq::new("shipping", "Siparişim ne zaman kargoya verilir?", "1-2 iş günü içinde.")
            .with_keywords(vec!["kargo", "teslimat"])
            .with_category("Kargo ve Teslimat"),
        Faq::new("refund", "İade nasıl yapılır?", "İade formunu doldurun.")
            .with_keywords(vec!["iade", "para"])
            .with_category("İade"),
        Faq::new("password", "Şifremi unuttum", "Giriş ekranından sıfırlayın.")
            .with_keywords(vec!["sifre", "giris"])
            .with_category("Hesap"),
    ]
}

fn config() -> RulesConfig {
    RulesConfig::default()
        .with_min_score(2)
        .with_stopwords(vec!["ve", "bir", "ne"])
        .with_synonym_group("iade", vec!["iptal", "geri"])
        .with_synonym_group("kargo", vec!["gonderi", "paket"])
}

#[test]
fn test_normalize_turkish_text() {
    assert_eq!(
        Normalizer::Folding.normalize("İSTANBUL'DA Çalışıyorum!"),
        "istanbul da calisiyorum"
    );
}

#[test]
fn test_best_match() {
    let faqs = catalog();
    let best = match_message("Kargom nerede, kargo teslimat ne zaman?", &faqs, &config()).unwrap();

    assert_eq!(best.faq_id, "shipping");
    // kargo (+2), teslimat (+2), category token "kargo" (+1)
    assert_eq!(best.score, 5);
    assert_eq!(best.match_details.exact_matches, 2);
    assert_eq!(best.match_details.synonym_matches, 0);
    assert!(best.match_details.category_match);
    assert_eq!(best.matched_keywords, vec!["kargo", "teslimat"]);
}

#[test]
fn test_exact_match_beats_synonym_match() {
    let faqs = vec![
        Faq::new("exact", "q", "a").with_keywords(vec!["iade", "para"]),
        Faq::new("synonym", "q", "a").with_keywords(vec!["iptal"]),
    ];
    let config = RulesConfig::default().with_synonym_group("iade", vec!["iptal", "para"]);

    let ranked = match_all_faqs("iade para", &faqs, &config);

    assert_eq!(ranked[0].result.faq_id, "exact");
    assert_eq!(ranked[0].score(), 4);
    assert_eq!(ranked[1].result.faq_id, "synonym");
    assert_eq!(ranked[1].score(), 2);
    assert_eq!(ranked[1].result.match_details.synonym_matches, 2);
    assert!(ranked[0].score() > ranked[1].score());
}

#[test]
fn test_repeated_keyword_counts_each_time() {
    let faqs = vec![Faq::new("1", "q", "a").with_keywords(vec!["iade"])];
    let best = match_message("iade iade iade", &faqs, &RulesConfig::default()).unwrap();

    assert_eq!(best.score, 6);
    assert_eq!(best.match_details.exact_matches, 3);
    assert_eq!(best.matched_keywords, vec!["iade"]);
}

#[test]
fn test_category_adds_at_most_one() {
    let faqs = vec![
        Faq::new("1", "q", "a")
            .with_keywords(vec!["fatura"])
            .with_category("Hesap Ayarlari Hesap"),
    ];
    let config = RulesConfig::default().with_min_score(0);

    let ranked = match_all_faqs("hesap ayarlari hesap hesap", &faqs, &config);

    assert_eq!(ranked[0].score(), 1);
    assert!(ranked[0].result.match_details.category_match);
}

#[test]
fn test_below_threshold_is_no_match() {
    let faqs = vec![Faq::new("1", "q", "a").with_keywords(vec!["iade"])];
    let config = RulesConfig::default().with_min_score(3);

    assert!(match_message("iade", &faqs, &config).is_none());

    let result = MatchResult::from(match_message("iade", &faqs, &config));
    assert_eq!(result, MatchResult::no_match());
    assert_eq!(result.faq_id, None);
    assert_eq!(result.score, 0);
    assert!(result.matched_keywords.is_empty());
    assert_eq!(result.match_details, MatchDetails::default());
}

#[test]
fn test_threshold_is_inclusive() {
    let faqs = vec![Faq::new("1", "q", "a").with_keywords(vec!["iade"])];
    let config = RulesConfig::default().with_min_score(2);

    assert_eq!(match_message("iade", &faqs, &config).unwrap().score, 2);
}

#[test]
fn test_ranking_is_sorted_and_deterministic() {
    let faqs = catalog();
    let config = config().with_min_score(0);
    let text = "paket iptal sifre";

    let first = match_all_faqs(text, &faqs, &config);
    let second = match_all_faqs(text, &faqs, &config);

    assert_eq!(first, second);
    assert_eq!(first.len(), faqs.len());
    assert!(first.windows(2).all(|w| w[0].score() >= w[1].score()));
}

#[test]
fn test_ties_keep_catalog_order() {
    let faqs = vec![
        Faq::new("b", "q", "a").with_keywords(vec!["iade"]),
        Faq::new("a", "q", "a").with_keywords(vec!["iade"]),
        Faq::new("c", "q", "a").with_keywords(vec!["kargo"]),
    ];

    let ranked = match_all_faqs("iade", &faqs, &RulesConfig::default());
    let ids: Vec<&str> = ranked.iter().map(|r| r.result.faq_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);

    let best = match_message("iade", &faqs, &RulesConfig::default()).unwrap();
    assert_eq!(best.faq_id, "b");
}

#[test]
fn test_empty_inputs() {
    let faqs = catalog();
    let config = RulesConfig::default().with_min_score(0);

    assert!(match_message("iade", &[], &config).is_none());
    assert!(match_all_faqs("iade", &[], &config).is_empty());

    let ranked = match_all_faqs("   ", &faqs, &config);
    assert!(ranked.iter().all(|r| r.score() == 0));
}

#[test]
fn test_blank_message_never_matches() {
    let faqs = vec![Faq::new("a", "q", "a").with_keywords(vec!["k"])];
    let config = RulesConfig::default().with_min_score(0);

    assert!(match_message("   ", &faqs, &config).is_none());
    assert!(match_message("", &faqs, &config).is_none());
    assert_eq!(
        MatchResult::from(match_message("   ", &faqs, &config)),
        MatchResult::no_match()
    );
}

#[test]
fn test_stopwords_are_ignored() {
    let faqs = vec![Faq::new("1", "q", "a").with_keywords(vec!["ve"])];
    let config = RulesConfig::default().with_stopwords(vec!["ve"]).with_min_score(0);

    let ranked = match_all_faqs("ve ve ve", &faqs, &config);
    assert_eq!(ranked[0].score(), 0);
}

#[test]
fn test_normalize_disabled_only_lowercases() {
    let faqs = vec![Faq::new("1", "q", "a").with_keywords(vec!["şifre"])];
    let config = RulesConfig::default().with_normalize(false);

    let best = match_message("ŞİFRE", &faqs, &config);
    assert!(best.is_none());

    let best = match_message("şifre", &faqs, &config).unwrap();
    assert_eq!(best.score, 2);
}

#[test]
fn test_ranked_faq_serializes_flat() {
    let faqs = catalog();
    let ranked = match_all_faqs("iade", &faqs, &config());
    let json = serde_json::to_value(&ranked[0]).unwrap();

    assert_eq!(json["faqId"], "refund");
    assert_eq!(json["score"], 3);
    assert_eq!(json["faq"]["question"], "İade nasıl yapılır?");
}
