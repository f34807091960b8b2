//! End-to-end tests for basic action and substance generation.
//!
//! Each test builds a small ontology, runs one Generator over it, and
//! asserts on the recorded event stream.

use pretty_assertions::assert_eq;

use ousia::process::{EventLog, Generator};
use ousia::{Action, Adposition, Event, Noun, Ontology, QSubstanceId, Substance, Time, Verb};

// ============================================================================
// Helpers
// ============================================================================

/// One proper-noun substance wrapped in a fresh role occurrence.
fn person(onto: &mut Ontology, name: &str) -> QSubstanceId {
    let substance = onto.add_substance(Substance::new(Noun::proper(name)));
    onto.occurrence(substance)
}

fn run_actions(onto: &Ontology, actions: &[ousia::ActionId]) -> EventLog {
    let mut gen = Generator::new(onto, EventLog::new());
    for &action in actions {
        gen.process_action(action).unwrap();
    }
    gen.finish()
}

/// Ids of all begin-substance events, in emission order.
fn substance_ids(log: &EventLog) -> Vec<&str> {
    log.events
        .iter()
        .filter_map(|e| match e {
            Event::BeginSubstance { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect()
}

// ============================================================================
// 1. Single agent, no themes: full event order
// ============================================================================

#[test]
fn test_single_agent_action_event_order() {
    let mut onto = Ontology::new();
    let alice = person(&mut onto, "Alice");

    let verb = Verb::new(1926); // "run"
    let mut run = Action::new(verb);
    run.add_agent_group([alice]);
    let run = onto.add_action(run);

    let log = run_actions(&onto, &[run]);

    let noun = Noun::proper("Alice");
    let expected = vec![
        Event::BeginAction { id: "a0".into(), verb, adverbs: vec![] },
        Event::BeginAgents { action: "a0".into() },
        Event::BeginDisjunction,
        Event::BeginSubstance { id: "r0".into(), noun: noun.clone() },
        Event::EndSubstance { id: "r0".into(), noun },
        Event::EndDisjunction,
        Event::EndAgents { action: "a0".into() },
        Event::BeginThemes { action: "a0".into() },
        Event::EndThemes { action: "a0".into() },
        Event::EndAction { id: "a0".into(), verb, adverbs: vec![] },
    ];
    assert_eq!(log.events, expected);
}

// ============================================================================
// 2. "(Alice and Bob)" agents, "Carol" theme: one bracket per group,
//    role ids in declaration order
// ============================================================================

#[test]
fn test_conjunction_group_shares_one_disjunction_bracket() {
    let mut onto = Ontology::new();
    let alice = person(&mut onto, "Alice");
    let bob = person(&mut onto, "Bob");
    let carol = person(&mut onto, "Carol");

    let mut give = Action::new(Verb::new(2136)); // "give"
    give.add_agent_group([alice, bob]);
    give.add_theme_group([carol]);
    let give = onto.add_action(give);

    let log = run_actions(&onto, &[give]);

    // One group on each side: two disjunction brackets in total.
    assert_eq!(log.count(|e| matches!(e, Event::BeginDisjunction)), 2);
    assert_eq!(log.count(|e| matches!(e, Event::EndDisjunction)), 2);

    // Agents section holds exactly one bracket around both substances.
    let begin_agents = log
        .events
        .iter()
        .position(|e| matches!(e, Event::BeginAgents { .. }))
        .unwrap();
    let end_agents = log
        .events
        .iter()
        .position(|e| matches!(e, Event::EndAgents { .. }))
        .unwrap();
    let agent_slice = &log.events[begin_agents..end_agents];
    assert_eq!(
        agent_slice
            .iter()
            .filter(|e| matches!(e, Event::BeginDisjunction))
            .count(),
        1
    );

    // Role ids assigned in declaration order.
    assert_eq!(substance_ids(&log), vec!["r0", "r1", "r2"]);
    let nouns: Vec<String> = log
        .events
        .iter()
        .filter_map(|e| match e {
            Event::BeginSubstance { noun, .. } => Some(noun.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(nouns, vec!["Alice", "Bob", "Carol"]);
}

// ============================================================================
// 3. Shared occurrence across two actions: expanded once, found once
// ============================================================================

#[test]
fn test_shared_occurrence_expands_once() {
    let mut onto = Ontology::new();
    let alice = person(&mut onto, "Alice");

    let mut runs = Action::new(Verb::new(1926));
    runs.add_agent_group([alice]);
    let runs = onto.add_action(runs);

    let mut praised = Action::new(Verb::new(871));
    praised.add_theme_group([alice]);
    let praised = onto.add_action(praised);

    let log = run_actions(&onto, &[runs, praised]);

    assert_eq!(log.count(|e| matches!(e, Event::BeginSubstance { .. })), 1);
    assert_eq!(
        log.count(|e| matches!(e, Event::SubstanceFound { id } if id == "r0")),
        1
    );

    // The found reference comes after the full expansion.
    let begin = log
        .events
        .iter()
        .position(|e| matches!(e, Event::BeginSubstance { .. }))
        .unwrap();
    let found = log
        .events
        .iter()
        .position(|e| matches!(e, Event::SubstanceFound { .. }))
        .unwrap();
    assert!(begin < found);
}

#[test]
fn test_distinct_occurrences_of_one_substance_expand_separately() {
    let mut onto = Ontology::new();
    let man = onto.add_substance(Substance::new(Noun::common(3144)));
    // "the man" as agent and "him" as theme: same substance, two occurrences.
    let as_agent = onto.occurrence(man);
    let as_theme = onto.occurrence(man);

    let mut washes = Action::new(Verb::new(35757));
    washes.add_agent_group([as_agent]);
    washes.add_theme_group([as_theme]);
    let washes = onto.add_action(washes);

    let log = run_actions(&onto, &[washes]);

    // Dedup is by occurrence handle, not by the wrapped substance.
    assert_eq!(log.count(|e| matches!(e, Event::BeginSubstance { .. })), 2);
    assert_eq!(log.count(|e| matches!(e, Event::SubstanceFound { .. })), 0);
    assert_eq!(substance_ids(&log), vec!["r0", "r1"]);
}

// ============================================================================
// 4. Repeated action reference: expanded once, found thereafter
// ============================================================================

#[test]
fn test_repeated_action_reference_is_found() {
    let mut onto = Ontology::new();
    let alice = person(&mut onto, "Alice");
    let mut run = Action::new(Verb::new(1926));
    run.add_agent_group([alice]);
    let run = onto.add_action(run);

    let log = run_actions(&onto, &[run, run, run]);

    assert_eq!(log.count(|e| matches!(e, Event::BeginAction { .. })), 1);
    assert_eq!(
        log.count(|e| matches!(e, Event::ActionFound { id } if id == "a0")),
        2
    );
}

// ============================================================================
// 5. Empty conjunction groups are invisible
// ============================================================================

#[test]
fn test_empty_conjunction_group_changes_nothing() {
    let build = |with_empty: bool| {
        let mut onto = Ontology::new();
        let alice = person(&mut onto, "Alice");
        let mut run = Action::new(Verb::new(1926));
        run.add_agent_group([alice]);
        if with_empty {
            run.add_agent_group([]);
            run.add_theme_group([]);
        }
        let run = onto.add_action(run);
        run_actions(&onto, &[run])
    };

    assert_eq!(build(false).events, build(true).events);
}

// ============================================================================
// 6. "(Alice and Bob) or Carol" as subject: two brackets, stable order
// ============================================================================

#[test]
fn test_disjunction_of_two_groups() {
    let mut onto = Ontology::new();
    let alice = person(&mut onto, "Alice");
    let bob = person(&mut onto, "Bob");
    let carol = person(&mut onto, "Carol");

    let mut sing = Action::new(Verb::new(17066));
    sing.add_agent_group([alice, bob]);
    sing.add_agent_group([carol]);
    let sing = onto.add_action(sing);

    let log = run_actions(&onto, &[sing]);

    assert_eq!(log.count(|e| matches!(e, Event::BeginDisjunction)), 2);
    assert_eq!(substance_ids(&log), vec!["r0", "r1", "r2"]);
}

// ============================================================================
// 7. Time anchored to an entity: "before the war"
// ============================================================================

#[test]
fn test_time_sites_expand_inside_the_bracket() {
    let mut onto = Ontology::new();
    let alice = person(&mut onto, "Alice");
    let war = onto.add_substance(Substance::new(Noun::common(973)));

    let mut fled = Action::new(Verb::new(2075));
    fled.add_agent_group([alice]);
    fled.add_time(Time::at(Adposition::Before, [war]));
    let fled = onto.add_action(fled);

    let log = run_actions(&onto, &[fled]);

    let begin = log
        .events
        .iter()
        .position(|e| matches!(e, Event::BeginTime { relation: Adposition::Before, .. }))
        .unwrap();
    let end = log
        .events
        .iter()
        .position(|e| matches!(e, Event::EndTime { relation: Adposition::Before, .. }))
        .unwrap();

    // The site gets a full expansion inside the bracket, numbered from the
    // same counter as role occurrences.
    let war_noun = Noun::common(973);
    let inside = &log.events[begin..=end];
    assert_eq!(
        inside
            .iter()
            .filter(|e| matches!(
                e,
                Event::BeginSubstance { id, noun } if id == "r1" && *noun == war_noun
            ))
            .count(),
        1
    );
    assert_eq!(
        inside.iter().filter(|e| matches!(e, Event::BeginDisjunction)).count(),
        1
    );

    // No datetime literal on this qualifier.
    assert!(matches!(
        log.events[begin],
        Event::BeginTime { datetime: None, .. }
    ));
}
