//! Determinism tests: the same knowledge always yields the same event
//! stream, expansion happens at most once per handle, and every reference
//! points backwards at an expansion.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest::sample::Index;

use ousia::process::{EventLog, Generator};
use ousia::{
    Action, Adjective, Adposition, Adverb, Event, Knowledge, Mind, Noun, Ontology, Place, Quality,
    Quantity, QuantSubstance, Relative, State, Substance, Tense, Time, Truth, Verb,
};

// ============================================================================
// Fixed rich graph, generated twice
// ============================================================================

/// A graph touching every feature: qualities, quantities, places, times,
/// relatives, states, shared occurrences and nested minds.
fn rich_knowledge() -> Knowledge {
    let mut knowledge = Knowledge::new();
    let onto = &mut knowledge.ontology;

    let it = onto.add_substance(Substance::new(Noun::IT));
    let root = onto.occurrence(it);

    let men = onto.add_substance(
        Substance::new(Noun::common(3144))
            .with_quality(Quality::new(Adjective::new(1191)).with_adverb(Adverb::new(77))),
    );
    let men_role = onto.add_qsubstance(QuantSubstance::new(men).with_quantity(Quantity::cardinal(3.0)));

    let karim = onto.add_substance(Substance::new(Noun::proper("Karim")));
    let karim_role = onto.occurrence(karim);

    let town = onto.add_substance(Substance::new(Noun::common(8226)));
    let wine = onto.add_substance(Substance::new(Noun::common(7891)));
    let wine_role = onto.occurrence(wine);

    // "The three tall men met Karim in the town yesterday-ish."
    let mut met = Action::new(Verb::new(4402).with_tense(Tense::Past));
    met.add_agent_group([men_role]);
    met.add_theme_group([karim_role]);
    met.add_place(Place::at(Adposition::In, [town]));
    met.add_time(Time::new(Adposition::At).with_adverb(Adverb::new(320)));
    let met = onto.add_action(met);

    // "Karim, drinking wine, ..." plus a possessive relative. The state
    // applies during the meeting, where Karim's occurrence first expands.
    let mut smiled = Action::new(Verb::new(28558).with_tense(Tense::Past));
    smiled.add_agent_group([karim_role]);
    let smiled = onto.add_action(smiled);

    let mut drinks = Action::new(Verb::new(1176));
    drinks.add_agent_group([karim_role]);
    drinks.add_theme_group([wine_role]);
    let drinks = onto.add_action(drinks);

    onto.qsubstance_mut(karim_role)
        .unwrap()
        .add_state(State::new(drinks).applies_during(met));
    onto.qsubstance_mut(karim_role)
        .unwrap()
        .add_relative(Relative::of(karim_role, men_role));

    let mut narrator = Mind::new("narrator", root);
    narrator.add_action(Truth::Fact, met);
    narrator.add_action(Truth::Fact, smiled);
    knowledge.add_mind(narrator);

    // Karim believes the men met him; the action is already memoized by then.
    let mut karims = Mind::new("karim", karim_role);
    karims.add_action(Truth::Believe, met);
    knowledge.add_mind(karims);

    knowledge
}

#[test]
fn test_rich_graph_generates_identically_twice() {
    let knowledge = rich_knowledge();
    let first = knowledge.generate(EventLog::new()).unwrap();
    let second = knowledge.generate(EventLog::new()).unwrap();

    assert_eq!(first.events, second.events);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    // Sanity: the graph is actually rich.
    assert!(first.count(|e| matches!(e, Event::BeginState { .. })) > 0);
    assert!(first.count(|e| matches!(e, Event::AddRelative { .. })) > 0);
    assert!(first.count(|e| matches!(e, Event::BeginPlace { .. })) > 0);
    assert!(first.count(|e| matches!(e, Event::BeginTime { .. })) > 0);
}

#[test]
fn test_rebuilt_graph_generates_identically() {
    // Not just one value generated twice: two independently built graphs.
    let first = rich_knowledge().generate(EventLog::new()).unwrap();
    let second = rich_knowledge().generate(EventLog::new()).unwrap();
    assert_eq!(first.events, second.events);
}

// ============================================================================
// Stream invariants
// ============================================================================

fn begin_substance_ids(log: &EventLog) -> Vec<&str> {
    log.events
        .iter()
        .filter_map(|e| match e {
            Event::BeginSubstance { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect()
}

fn begin_action_ids(log: &EventLog) -> Vec<&str> {
    log.events
        .iter()
        .filter_map(|e| match e {
            Event::BeginAction { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect()
}

/// Every expansion happens once and every reference points backwards.
fn assert_stream_invariants(log: &EventLog) {
    let substances = begin_substance_ids(log);
    let mut deduped = substances.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(substances.len(), deduped.len(), "substance expanded twice");

    let actions = begin_action_ids(log);
    let mut deduped = actions.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(actions.len(), deduped.len(), "action expanded twice");

    for (i, event) in log.events.iter().enumerate() {
        match event {
            Event::SubstanceFound { id } => {
                let seen = log.events[..i]
                    .iter()
                    .any(|e| matches!(e, Event::BeginSubstance { id: b, .. } if b == id));
                assert!(seen, "reference to {id} before its expansion");
            }
            Event::ActionFound { id } => {
                let seen = log.events[..i]
                    .iter()
                    .any(|e| matches!(e, Event::BeginAction { id: b, .. } if b == id));
                assert!(seen, "reference to {id} before its expansion");
            }
            _ => {}
        }
    }
}

#[test]
fn test_rich_graph_stream_invariants_hold() {
    let log = rich_knowledge().generate(EventLog::new()).unwrap();
    assert_stream_invariants(&log);
}

// ============================================================================
// Property tests over random graphs
// ============================================================================

#[derive(Debug, Clone)]
struct RoleSpec {
    groups: Vec<Vec<Index>>,
}

#[derive(Debug, Clone)]
struct ActionSpec {
    verb: u32,
    agents: RoleSpec,
    themes: RoleSpec,
}

fn role_spec() -> impl Strategy<Value = RoleSpec> {
    prop::collection::vec(prop::collection::vec(any::<Index>(), 0..3), 0..3)
        .prop_map(|groups| RoleSpec { groups })
}

fn action_spec() -> impl Strategy<Value = ActionSpec> {
    (1u32..40_000, role_spec(), role_spec()).prop_map(|(verb, agents, themes)| ActionSpec {
        verb,
        agents,
        themes,
    })
}

/// Build an ontology from random senses and random role assignments. The
/// same spec always builds the same graph.
fn build(senses: &[u32], specs: &[ActionSpec]) -> (Ontology, Vec<ousia::ActionId>) {
    let mut onto = Ontology::new();
    let roles: Vec<_> = senses
        .iter()
        .map(|&sense| {
            let substance = onto.add_substance(Substance::new(Noun::common(sense)));
            onto.occurrence(substance)
        })
        .collect();

    let mut actions = Vec::new();
    for spec in specs {
        let mut action = Action::new(Verb::new(spec.verb));
        for group in &spec.agents.groups {
            action.add_agent_group(group.iter().map(|ix| roles[ix.index(roles.len())]));
        }
        for group in &spec.themes.groups {
            action.add_theme_group(group.iter().map(|ix| roles[ix.index(roles.len())]));
        }
        actions.push(onto.add_action(action));
    }
    (onto, actions)
}

fn run(onto: &Ontology, actions: &[ousia::ActionId]) -> EventLog {
    let mut gen = Generator::new(onto, EventLog::new());
    for &action in actions {
        gen.process_action(action).unwrap();
    }
    gen.finish()
}

proptest! {
    #[test]
    fn test_random_graphs_generate_deterministically(
        senses in prop::collection::vec(1u32..50_000, 1..6),
        specs in prop::collection::vec(action_spec(), 1..5),
    ) {
        let (onto, actions) = build(&senses, &specs);
        let first = run(&onto, &actions);
        let second = run(&onto, &actions);
        prop_assert_eq!(first.events, second.events);
    }

    #[test]
    fn test_random_graphs_uphold_stream_invariants(
        senses in prop::collection::vec(1u32..50_000, 1..6),
        specs in prop::collection::vec(action_spec(), 1..5),
    ) {
        let (onto, actions) = build(&senses, &specs);
        let log = run(&onto, &actions);
        assert_stream_invariants(&log);

        // Brackets balance for every section kind.
        let pairs: [fn(&Event) -> bool; 6] = [
            |e: &Event| matches!(e, Event::BeginAgents { .. }),
            |e: &Event| matches!(e, Event::EndAgents { .. }),
            |e: &Event| matches!(e, Event::BeginThemes { .. }),
            |e: &Event| matches!(e, Event::EndThemes { .. }),
            |e: &Event| matches!(e, Event::BeginDisjunction),
            |e: &Event| matches!(e, Event::EndDisjunction),
        ];
        for pair in pairs.chunks(2) {
            prop_assert_eq!(log.count(pair[0]), log.count(pair[1]));
        }
    }
}
