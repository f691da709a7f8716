//! End-to-end flows through the page command handlers

use chrono::{Local, TimeZone, Utc};

use hire_me::consts::SUBMISSIONS_KEY;
use hire_me::quiz::{QuizEvent, Tier};
use hire_me::submissions::{DisplayCard, PitchForm, render};
use hire_me::{KeyValueStorage, MemoryStorage, Portfolio, UiEvent, View};

fn settle(app: &mut Portfolio<MemoryStorage>) {
    loop {
        let pending = app.take_transitions();
        if pending.is_empty() {
            break;
        }
        for (_, t) in pending {
            app.fulfil(t);
        }
    }
}

fn take_quiz(app: &mut Portfolio<MemoryStorage>, values: &[u32]) -> Vec<UiEvent> {
    app.show(View::Quiz);
    for (q, &v) in values.iter().enumerate() {
        app.select_option(q, v).unwrap();
        settle(app);
    }
    app.drain_events()
}

fn pitch(company: &str) -> PitchForm {
    PitchForm {
        company_name: company.to_string(),
        contact_name: "Jo".to_string(),
        contact_role: "CTO".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_quiz_then_submit_then_list() {
    let mut app = Portfolio::new(MemoryStorage::new());
    app.start();

    let events = take_quiz(&mut app, &[10, 8, 6, 4, 2]);
    let result = events
        .iter()
        .find_map(|e| match e {
            UiEvent::Quiz(QuizEvent::Finished(r)) => Some(*r),
            _ => None,
        })
        .unwrap();
    assert_eq!(result.score, 30);
    assert_eq!(result.percentage, 60);
    assert_eq!(result.tier, Tier::Good);

    let now = Local
        .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let stored = app.submit(pitch("Acme"), now).unwrap();
    assert_eq!(stored.quiz_score, 30);

    app.show(View::Submissions);
    let cards = app
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            UiEvent::RenderSubmissions(cards) => Some(cards),
            _ => None,
        })
        .last()
        .unwrap();
    match &cards[..] {
        [DisplayCard::Submission(card)] => {
            assert_eq!(card.tier, Tier::Good);
            assert_eq!(card.date, "6/1/2025");
        }
        other => panic!("unexpected cards {:?}", other),
    }
}

#[test]
fn test_mediocre_result_is_poor_badge() {
    let mut app = Portfolio::new(MemoryStorage::new());
    let events = take_quiz(&mut app, &[10, 8, 4, 0, 0]);
    assert!(events.iter().any(|e| matches!(
        e,
        UiEvent::Quiz(QuizEvent::Finished(r)) if r.tier == Tier::Mediocre && r.percentage == 44
    )));

    let stored = app
        .submit(pitch("Initech"), Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        .unwrap();
    match &render(&[stored])[..] {
        [DisplayCard::Submission(card)] => assert_eq!(card.tier, Tier::Poor),
        other => panic!("unexpected cards {:?}", other),
    }
}

#[test]
fn test_submissions_persist_across_page_loads() {
    let mut app = Portfolio::new(MemoryStorage::new());
    let t0 = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    app.submit(pitch("First"), t0).unwrap();
    app.submit(pitch("Second"), t0).unwrap();

    // Reload: a new page over the same storage
    let storage = app.store().storage().clone();
    assert!(storage.get(SUBMISSIONS_KEY).is_some());
    let reloaded = Portfolio::new(storage);
    let names: Vec<_> = reloaded
        .store()
        .load()
        .into_iter()
        .map(|r| r.company_name)
        .collect();
    assert_eq!(names, ["Second", "First"]);
}

#[test]
fn test_corrupt_storage_renders_placeholder() {
    let mut storage = MemoryStorage::new();
    storage.set(SUBMISSIONS_KEY, "definitely not json").unwrap();
    let mut app = Portfolio::new(storage);
    app.start();
    let events = app.drain_events();
    assert!(matches!(
        &events[..],
        [UiEvent::RenderSubmissions(cards)] if matches!(&cards[..], [DisplayCard::Placeholder { .. }])
    ));
}
