//! Tests for stage/stage_state

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn stage_with_button() -> (Stage, WindowId, HostId) {
    let mut stage = Stage::new();
    let window = stage.add_window();
    let host = stage.add_tipped_host(window, "Save", Rect::new(4, 2, 10, 1), "Save file");
    (stage, window, host)
}

fn drain(stage: &mut Stage) -> Vec<FrameworkEvent> {
    std::iter::from_fn(|| stage.poll_event()).collect()
}

#[test]
fn test_add_window_queues_notification() {
    let mut stage = Stage::new();
    let window = stage.add_window();

    assert_eq!(drain(&mut stage), vec![FrameworkEvent::WindowOpened(window)]);
    assert_eq!(stage.top_level_windows(), vec![window]);
}

#[test]
fn test_hover_opens_enabled_host_after_default_delay() {
    let (mut stage, window, host) = stage_with_button();
    let now = Instant::now();
    drain(&mut stage);

    stage.move_pointer(window, Point::new(5.0, 2.0), now);
    assert_eq!(stage.next_deadline(), Some(now + ms(DEFAULT_SHOW_DELAY_MS)));

    stage.advance(now + ms(DEFAULT_SHOW_DELAY_MS - 1));
    assert_eq!(stage.open_sessions().count(), 0);

    stage.advance(now + ms(DEFAULT_SHOW_DELAY_MS));
    let events = drain(&mut stage);

    assert_eq!(
        events.last(),
        Some(&FrameworkEvent::TooltipOpened {
            session: SessionId(1),
            host,
        })
    );
    assert_eq!(stage.next_deadline(), None);
}

#[test]
fn test_hover_does_not_rearm_on_same_host() {
    let (mut stage, window, host) = stage_with_button();
    let now = Instant::now();
    stage.move_pointer(window, Point::new(5.0, 2.0), now);
    stage.advance(now + ms(DEFAULT_SHOW_DELAY_MS));
    stage.request_close(SessionId(1));

    stage.move_pointer(window, Point::new(6.0, 2.0), now + ms(500));
    stage.advance(now + ms(2000));

    assert!(!stage.is_open(SessionId(1)));
    assert!(stage.host(host).is_some());
}

#[test]
fn test_disabled_host_has_no_native_hover() {
    let (mut stage, window, host) = stage_with_button();
    if let Some(h) = stage.host_mut(host) {
        h.enabled = false;
    }

    stage.move_pointer(window, Point::new(5.0, 2.0), Instant::now());

    assert_eq!(stage.next_deadline(), None);
}

#[test]
fn test_show_on_disabled_fires_only_once() {
    let (mut stage, window, host) = stage_with_button();
    if let Some(h) = stage.host_mut(host) {
        h.enabled = false;
        h.show_on_disabled = true;
        h.show_delay_ms = Some(50);
    }
    let now = Instant::now();
    stage.move_pointer(window, Point::new(5.0, 2.0), now);
    stage.advance(now + ms(50));
    assert!(stage.is_open(SessionId(1)));
    stage.request_close(SessionId(1));

    stage.move_pointer(window, Point::new(40.0, 20.0), now + ms(100));
    stage.move_pointer(window, Point::new(5.0, 2.0), now + ms(200));

    assert_eq!(stage.next_deadline(), None);
}

#[test]
fn test_tooltip_is_placed_below_host() {
    let (mut stage, _, host) = stage_with_button();
    let session = stage.promote_content(host).unwrap();

    stage.request_open(session, host);

    let rect = stage.session(session).and_then(|s| s.rect);
    assert_eq!(rect, Some(Rect::new(4, 3, 13, 3)));
}

#[test]
fn test_opening_one_session_closes_another() {
    let (mut stage, window, first) = stage_with_button();
    let second = stage.add_tipped_host(window, "Open", Rect::new(20, 2, 10, 1), "Open file");
    let s1 = stage.promote_content(first).unwrap();
    let s2 = stage.promote_content(second).unwrap();
    stage.request_open(s1, first);
    drain(&mut stage);

    stage.request_open(s2, second);

    assert_eq!(
        drain(&mut stage),
        vec![
            FrameworkEvent::TooltipClosed { session: s1 },
            FrameworkEvent::TooltipOpened {
                session: s2,
                host: second
            },
        ]
    );
}

#[test]
fn test_locate_host_in_local_coordinates() {
    let (stage, window, host) = stage_with_button();

    let hit = stage.locate(Target::Host(host), window, Point::new(6.0, 2.5));

    assert_eq!(hit.map(|h| h.local), Some(Point::new(2.0, 0.5)));
}

#[test]
fn test_locate_closed_tooltip_is_none() {
    let (mut stage, window, host) = stage_with_button();
    let session = stage.promote_content(host).unwrap();

    assert!(
        stage
            .locate(Target::Tooltip(session), window, Point::new(0.0, 0.0))
            .is_none()
    );
}

#[test]
fn test_removed_host_no_longer_resolves() {
    let (mut stage, window, host) = stage_with_button();
    let session = stage.promote_content(host).unwrap();
    stage.request_open(session, host);
    drain(&mut stage);

    stage.remove_host(host);

    assert!(stage.locate(Target::Host(host), window, Point::default()).is_none());
    assert!(stage.tooltip_content(host).is_none());
    assert!(stage.show_delay_ms(host).is_none());
    assert_eq!(
        drain(&mut stage),
        vec![FrameworkEvent::TooltipClosed { session }]
    );
}

#[test]
fn test_close_window_removes_its_hosts() {
    let (mut stage, window, host) = stage_with_button();
    drain(&mut stage);

    stage.close_window(window);

    assert!(stage.host(host).is_none());
    assert_eq!(drain(&mut stage), vec![FrameworkEvent::WindowClosed(window)]);
    assert!(stage.top_level_windows().is_empty());
}

#[test]
fn test_requests_are_logged_in_order() {
    let (mut stage, _, host) = stage_with_button();
    let session = stage.promote_content(host).unwrap();
    stage.request_open(session, host);
    stage.request_close(session);

    assert_eq!(
        stage.take_requests(),
        vec!["promote h1 -> s1", "open s1 on h1", "close s1"]
    );
    assert!(stage.requests().is_empty());
}
