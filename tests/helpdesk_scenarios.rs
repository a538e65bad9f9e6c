//! End-to-end help-desk scenarios against the public dispatcher API
//! Run with: cargo test --test helpdesk_scenarios

use std::sync::Once;

use helpdesk_bot::application::messaging::{MessageDispatcher, RouterSettings};
use helpdesk_bot::domain::entities::{Event, Outbound};
use helpdesk_bot::domain::rules::ScriptedDice;
use helpdesk_bot::infrastructure::roster::MemoryRoster;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn dispatcher() -> MessageDispatcher {
    ensure_init();
    MessageDispatcher::new(RouterSettings {
        channel: "#etsuacm".to_string(),
        nickname: "acm_bot".to_string(),
        command_char: '!',
        quit_message: "Help desk closed.".to_string(),
    })
}

fn roster() -> MemoryRoster {
    let mut roster = MemoryRoster::new()
        .with_member("alice")
        .with_member("bob")
        .with_member("helper1")
        .with_member("helper2")
        .with_member("chanop");
    roster.set_voiced("helper1", true);
    roster.set_voiced("helper2", true);
    roster.set_operator("chanop", true);
    roster
}

fn messages_to<'a>(actions: &'a [Outbound], nick: &str) -> Vec<&'a str> {
    actions
        .iter()
        .filter_map(|a| match a {
            Outbound::Message { target, text } if target == nick => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_alice_request_notifies_every_volunteer() {
    let mut d = dispatcher();
    let roster = roster();

    let actions = d.handle(Event::private("alice", "help printer broken"), &roster);

    assert_eq!(d.desk().queue().len(), 1);
    assert_eq!(
        messages_to(&actions, "alice"),
        vec![
            "Your question has been added to the help queue.",
            "A volunteer will contact you as soon as they can.",
            "There are currently 1 person(s) in the queue.",
        ]
    );
    for helper in ["helper1", "helper2"] {
        assert_eq!(
            messages_to(&actions, helper),
            vec!["A person has been added to the help queue."]
        );
    }
}

#[test]
fn test_volunteer_serves_queue_in_order() {
    let mut d = dispatcher();
    let roster = roster();
    d.handle(Event::private("alice", "help printer broken"), &roster);
    d.handle(Event::private("bob", "help wifi down"), &roster);

    let actions = d.handle(Event::private("helper1", "next"), &roster);
    assert_eq!(
        messages_to(&actions, "helper1"),
        vec![
            "Next User: alice",
            " Question: printer broken",
            "Please contact the user via private message to start helping them.",
        ]
    );

    let actions = d.handle(Event::private("chanop", "next"), &roster);
    assert_eq!(messages_to(&actions, "chanop")[0], "Next User: bob");

    let actions = d.handle(Event::private("helper2", "next"), &roster);
    assert_eq!(
        messages_to(&actions, "helper2"),
        vec!["There is no one in the help queue at this time."]
    );
    assert_eq!(d.desk().queue().len(), 0);
}

#[test]
fn test_duplicate_then_requeue_after_service() {
    let mut d = dispatcher();
    let roster = roster();
    d.handle(Event::private("alice", "help first"), &roster);
    let actions = d.handle(Event::private("alice", "help second"), &roster);

    assert_eq!(
        messages_to(&actions, "alice")[0],
        "You can only have one question in the queue at a time."
    );
    assert_eq!(d.desk().queue().len(), 1);

    d.handle(Event::private("helper1", "next"), &roster);
    let actions = d.handle(Event::private("alice", "help second"), &roster);
    assert_eq!(
        messages_to(&actions, "alice")[2],
        "There are currently 1 person(s) in the queue."
    );
}

#[test]
fn test_departed_requesters_are_skipped_permanently() {
    let mut d = dispatcher();
    let mut roster = roster();
    d.handle(Event::private("alice", "help one"), &roster);
    d.handle(Event::private("bob", "help two"), &roster);

    roster.part("alice");
    let actions = d.handle(Event::private("helper1", "next"), &roster);
    assert_eq!(messages_to(&actions, "helper1")[0], "Next User: bob");

    roster.join("alice");
    let actions = d.handle(Event::private("helper1", "next"), &roster);
    assert_eq!(
        messages_to(&actions, "helper1"),
        vec!["There is no one in the help queue at this time."]
    );
}

#[test]
fn test_unprivileged_users_cannot_manage_queue() {
    let mut d = dispatcher();
    let roster = roster();
    d.handle(Event::private("alice", "help stuck"), &roster);

    for command in ["purge", "die", "next"] {
        let actions = d.handle(Event::private("bob", command), &roster);
        assert_eq!(
            actions,
            vec![Outbound::message("bob", "You do not have permission to run this command.")],
            "{} should be denied",
            command
        );
    }
    // Voice is enough for next but not for purge or die
    for command in ["purge", "die"] {
        let actions = d.handle(Event::private("helper1", command), &roster);
        assert!(!actions.iter().any(Outbound::is_quit));
    }
    assert_eq!(d.desk().queue().len(), 1);

    let actions = d.handle(Event::private("chanop", "purge"), &roster);
    assert_eq!(
        actions,
        vec![Outbound::message("chanop", "The help queue has been purged")]
    );
    assert_eq!(d.desk().queue().len(), 0);
}

#[test]
fn test_history_returns_last_ten_channel_lines() {
    let mut d = dispatcher();
    let roster = roster();
    for i in 1..=11 {
        d.handle(Event::public("alice", format!("message {}", i)), &roster);
    }

    let actions = d.handle(Event::private("bob", "history"), &roster);
    let lines = messages_to(&actions, "bob");
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.first(), Some(&"alice: message 2"));
    assert_eq!(lines.last(), Some(&"alice: message 11"));
    assert!(!lines.contains(&"alice: message 1"));
}

#[test]
fn test_history_includes_bot_channel_replies() {
    let mut d = dispatcher().with_dice(ScriptedDice::new([4, 5]));
    let roster = roster();
    d.handle(Event::public("alice", "!roll 2d6+3"), &roster);
    d.handle(Event::public("bob", "!stats"), &roster);

    let actions = d.handle(Event::private("bob", "history"), &roster);
    assert_eq!(
        messages_to(&actions, "bob"),
        vec![
            "alice: !roll 2d6+3",
            "acm_bot: alice: (2d6+3) = 12",
            "bob: !stats",
            "acm_bot: Number of people in the help queue: 0",
        ]
    );
}

#[test]
fn test_zero_dice_roll_is_modifier_only() {
    let mut d = dispatcher();
    let actions = d.handle(Event::public("alice", "!roll 0d6+5"), &roster());
    assert_eq!(actions, vec![Outbound::message("#etsuacm", "alice: (0d6+5) = 5")]);
}

#[test]
fn test_unknown_commands_always_go_to_issuer() {
    let mut d = dispatcher();
    let roster = roster();
    let expected = vec![Outbound::message("bob", "Sorry. frobnicate is not a valid command.")];

    assert_eq!(d.handle(Event::public("bob", "!FROBNICATE"), &roster), expected);
    assert_eq!(d.handle(Event::private("bob", "frobnicate"), &roster), expected);
}

#[test]
fn test_operator_shutdown_emits_quit() {
    let mut d = dispatcher();
    let actions = d.handle(Event::private("chanop", "die"), &roster());
    assert_eq!(actions, vec![Outbound::Quit("Help desk closed.".to_string())]);
}
