use racecard::core::connections::{RatingTable, RatingTables};
use racecard::{evaluate_card, Entrant, Race, RaceCard, RaceEvaluator, ScoringError};

const CARD: &str = r#"{
  "races": [
    {
      "track": "Ascot", "class": "Group 1", "distance": 12,
      "horses": [
        {"name": "Auguste Rodin", "stall": 1, "form": "1-1-2-1", "or": 118, "age": 4,
         "trainer": "Aidan O'Brien", "jockey": "Ryan Moore", "cd": "CD"},
        {"name": "Mostahdaf", "stall": 8, "form": "2-1-1-3", "or": 121, "age": 5,
         "trainer": "John & Thady Gosden", "jockey": "Frankie Dettori"},
        {"name": "Outsider", "stall": 5, "form": "0-0-P-9", "or": 70, "age": 9},
        {"name": "Middle", "stall": 3, "form": "4-5-6", "or": 85, "age": 6}
      ]
    },
    {
      "track": "Newmarket", "class": "Listed", "distance": 8,
      "horses": [
        {"name": "Alpha", "stall": 1, "form": "1-2-1"},
        {"name": "Beta", "stall": 6, "form": "0-9-P"},
        {"name": "Gamma", "stall": 4, "form": "3-3-2"}
      ]
    },
    {
      "track": "Thirsk", "class": "Handicap", "distance": 6,
      "horses": [{"name": "Lonely"}]
    }
  ]
}"#;

#[test]
fn test_card_selection_matches_known_scores() {
    let card = RaceCard::from_json_str(CARD).unwrap();
    let selection = evaluate_card(&card.races).unwrap();

    assert_eq!(selection.len(), 3);

    let r1 = selection.get("R1").unwrap();
    assert_eq!(r1.len(), 2);
    assert_eq!(r1[0].name, "Auguste Rodin");
    assert_eq!(r1[0].scores.reliability, 4.0);
    assert_eq!(r1[0].scores.draw_bias, 0.6);
    assert_eq!(r1[0].scores.connections, 7.0);
    assert_eq!(r1[0].scores.class_fitness, 11);
    assert_eq!(r1[0].scores.primary, 11.6);
    assert_eq!(r1[0].scores.total, 22.6);

    assert_eq!(r1[1].name, "Mostahdaf");
    assert_eq!(r1[1].scores.reliability, 3.8);
    assert_eq!(r1[1].scores.draw_bias, -0.4);
    // "John & Thady Gosden" matches no trainer key; only the jockey counts
    assert_eq!(r1[1].scores.connections, 2.8);
    assert_eq!(r1[1].scores.class_fitness, 8);
    assert_eq!(r1[1].scores.total, 14.2);

    let r2 = selection.get("R2").unwrap();
    let names: Vec<&str> = r2.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Gamma"]);
    assert_eq!(r2[0].scores.total, 7.1);
    assert_eq!(r2[1].scores.reliability, 3.68);
    assert_eq!(r2[1].scores.total, 6.3);

    // Single runner: not padded to two
    let r3 = selection.get("R3").unwrap();
    assert_eq!(r3.len(), 1);
    assert_eq!(r3[0].name, "Lonely");
}

#[test]
fn test_full_ranking_agrees_with_selection() {
    let card = RaceCard::from_json_str(CARD).unwrap();
    let evaluator = RaceEvaluator::default();
    let selection = evaluator.evaluate_card(&card.races).unwrap();

    for (race, selected) in card.races.iter().zip(&selection.races) {
        let ranked = evaluator.rank_race(race).unwrap();
        assert_eq!(ranked.len(), race.field_size());
        assert_eq!(&ranked[..selected.contenders.len()], selected.contenders.as_slice());
    }
}

#[test]
fn test_evaluation_is_repeatable() {
    let card = RaceCard::from_json_str(CARD).unwrap();
    let first = evaluate_card(&card.races).unwrap();
    for _ in 0..5 {
        assert_eq!(evaluate_card(&card.races).unwrap(), first);
    }
}

#[test]
fn test_custom_tables_change_connections() {
    let card = RaceCard::from_json_str(CARD).unwrap();
    let tables = RatingTables::new(
        RatingTable::new([("gosden", 3.5)]),
        RatingTable::default_jockeys(),
    );
    let evaluator = RaceEvaluator::new(tables, 4);
    let selection = evaluator.evaluate_card(&card.races).unwrap();

    let r1 = selection.get("R1").unwrap();
    assert_eq!(r1.len(), 4);
    let mostahdaf = r1.iter().find(|e| e.name == "Mostahdaf").unwrap();
    assert_eq!(mostahdaf.scores.connections, 6.3);
    // Aidan O'Brien is no longer rated as a trainer
    let rodin = r1.iter().find(|e| e.name == "Auguste Rodin").unwrap();
    assert_eq!(rodin.scores.connections, 3.0);
}

#[test]
fn test_negative_stall_is_reported() {
    let card = RaceCard::from_json_str(
        r#"[{"class": "Handicap", "distance": 5, "horses": [{"name": "Bad", "stall": -1}]}]"#,
    )
    .unwrap();

    match evaluate_card(&card.races) {
        Err(ScoringError::InvalidInput { field, .. }) => assert_eq!(field, "R1.horses[0].stall"),
        other => panic!("expected invalid stall, got {:?}", other),
    }
}

#[test]
fn test_missing_class_is_reported() {
    let card =
        RaceCard::from_json_str(r#"[{"distance": 5, "horses": [{"name": "A"}]}]"#).unwrap();

    let err = evaluate_card(&card.races).unwrap_err();
    assert!(err.to_string().contains("R1.class"));
}

#[test]
fn test_primary_rounds_stored_sum_in_large_handicap() {
    // A: rel 1.05 + draw 1.0 is stored just below 2.05 and rounds to 2.0,
    // tying B on total and primary; card order then puts B first.
    let mut entrants = vec![
        Entrant {
            stall: 2,
            official_rating: 50,
            ..Entrant::new("B")
        },
        Entrant {
            stall: 1,
            form: "00".to_string(),
            official_rating: 50,
            ..Entrant::new("A")
        },
    ];
    for stall in 3..=20 {
        entrants.push(Entrant {
            stall,
            form: "PPP".to_string(),
            official_rating: 40,
            age: 9,
            ..Entrant::new(format!("Filler {}", stall))
        });
    }
    let race = Race {
        entrants,
        distance: Some(6.0),
        track: String::new(),
        class_label: Some("Handicap".to_string()),
    };

    let selection = evaluate_card(&[race]).unwrap();
    let r1 = selection.get("R1").unwrap();

    assert_eq!(r1[0].name, "B");
    assert_eq!(r1[1].name, "A");
    assert_eq!(r1[1].scores.reliability, 1.05);
    assert_eq!(r1[1].scores.draw_bias, 1.0);
    assert_eq!(r1[1].scores.primary, 2.0);
    assert_eq!(r1[1].scores.total, 3.0);
}

#[test]
fn test_first_invalid_race_is_reported() {
    let card = RaceCard::from_json_str(
        r#"[{"class": "Handicap", "distance": 5, "horses": [{"name": "Ok"}]},
            {"class": "Handicap", "horses": [{"name": "NoDistance"}]},
            {"distance": 5, "horses": [{"name": "NoClass"}]},
            {"class": "Handicap", "distance": 5, "horses": [{"name": "Bad", "stall": 0}]}]"#,
    )
    .unwrap();

    for _ in 0..20 {
        let err = evaluate_card(&card.races).unwrap_err();
        assert!(err.to_string().contains("R2.distance"), "{}", err);
    }
}
