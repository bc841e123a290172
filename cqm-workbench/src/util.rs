use cqm_loss::RecordingSink;
use cqm_loss::replay::Replay;
use cqm_loss::station::spec::LinkKind;
use cqm_loss::trace::tracer::LossTracer;

pub fn print_station_stats(tracer: &LossTracer, replay: &Replay) {
    println!("--- Station stats ---");
    for (addr, stats) in tracer.stats() {
        let kind = match replay.stations().get(&addr).map(|s| s.kind()) {
            Some(LinkKind::Ordinary) => "ordinary",
            Some(LinkKind::DirectPeerLink) => "direct peer link",
            None => "removed",
        };
        println!("* {addr} ({kind})");
        println!("  * Acked frames: {}", stats.acked);
        println!(
            "  * Lost frames: {} (longest streak without ack: {})",
            stats.lost, stats.max_lost_streak
        );
        println!(
            "    | {} lost frames not counted (driver opt-out, station teardown or aggregated without status)",
            stats.lost_ignored
        );
        println!("  * Frames without ack expected: {}", stats.no_ack);
        println!("  * Packet-loss notifications: {}", stats.notifications);

        if let Some(station) = replay.stations().get(&addr) {
            println!(
                "  * Pending lost frames at end of run: {}",
                station.loss().lost_packets()
            );
        }
    }
}

pub fn print_notifications(sink: &RecordingSink) {
    println!("--- CQM packet-loss events ---");
    let events = sink.events();
    if events.is_empty() {
        println!("* None");
    }
    for event in events {
        println!("* {}: {} packets lost", event.peer, event.lost_packets);
    }
}
