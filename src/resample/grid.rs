use tracing::warn;

use super::options::ResampleOptions;
use crate::trace::Trace;

/// Ascending list of output frame times for a trace.
///
/// The base grid is spaced at the frame interval from the first sample
/// time to the last, each point computed by index so accumulation error
/// cannot drift the late frames; when the final step falls short of the
/// last sample time, that time closes the grid anyway. With event
/// alignment on, events that fall farther than the snap window from
/// every base-grid time get their own extra frame time. The final list
/// is sorted and times within `time_epsilon` of each other collapse to
/// one. A trace whose span touches a non-finite time yields no times.
pub fn frame_times(trace: &Trace, options: &ResampleOptions) -> Vec<f64> {
    let (Some(start), Some(end)) = (trace.start_time(), trace.end_time()) else {
        return Vec::new();
    };
    if !(start.is_finite() && end.is_finite()) {
        warn!("trace has a non-finite time span, producing no frames");
        return Vec::new();
    }

    let interval = options.frame_interval();
    let mut times = Vec::new();
    let mut k = 0usize;
    loop {
        let t = start + k as f64 * interval;
        if t > end + options.time_epsilon {
            break;
        }
        times.push(t.min(end));
        k += 1;
    }
    if times.last().is_some_and(|&last| end - last > options.time_epsilon) {
        times.push(end);
    }

    if options.event_alignment {
        let snap = interval * options.event_snap_fraction;
        let extra: Vec<f64> = trace
            .events()
            .iter()
            .map(|event| event.t)
            .filter(|&t| (start..=end).contains(&t) && nearest_distance(&times, t) > snap)
            .collect();
        times.extend(extra);
    }

    times.sort_by(|a, b| a.total_cmp(b));
    times.dedup_by(|a, b| (*a - *b).abs() < options.time_epsilon);
    times
}

/// Distance from `t` to the closest value in a sorted slice.
fn nearest_distance(sorted: &[f64], t: f64) -> f64 {
    let i = sorted.partition_point(|&g| g <= t);
    let after = sorted.get(i).map(|g| (g - t).abs());
    let before = i.checked_sub(1).and_then(|j| sorted.get(j)).map(|g| (g - t).abs());

    match (before, after) {
        (Some(b), Some(a)) => b.min(a),
        (Some(d), None) | (None, Some(d)) => d,
        (None, None) => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Sample, TraceEvent};
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-9;

    fn span_trace(start: f64, end: f64, events: Vec<TraceEvent>) -> Trace {
        Trace::new(vec![Sample::new(start), Sample::new(end)], events)
    }

    fn options(fps: f64) -> ResampleOptions {
        ResampleOptions::default().with_fps(fps)
    }

    #[test]
    fn empty_trace_yields_no_times() {
        assert!(frame_times(&Trace::default(), &options(30.0)).is_empty());
    }

    #[test]
    fn non_finite_sample_times_yield_no_times() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let trace = Trace::new(vec![Sample::new(0.0), Sample::new(bad)], Vec::new());

            assert!(
                frame_times(&trace, &options(30.0)).is_empty(),
                "a span touching {bad} should produce no frame times"
            );
        }
    }

    #[test]
    fn base_grid_spans_the_trace_inclusive() {
        let times = frame_times(&span_trace(0.0, 1.0, Vec::new()), &options(2.0));

        assert_eq!(times.len(), 3);
        assert_relative_eq!(times[0], 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(times[1], 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(times[2], 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn grid_never_steps_past_the_last_sample() {
        let times = frame_times(&span_trace(0.0, 1.1, Vec::new()), &options(2.0));

        assert_eq!(times.len(), 4);
        assert!(times.iter().all(|&t| t <= 1.1));
    }

    #[test]
    fn short_final_step_still_closes_on_the_end_time() {
        // A 1.1 s span at 2 fps leaves 0.1 s after the last grid step;
        // the end time gets its own frame so the closing state renders.
        let times = frame_times(&span_trace(0.0, 1.1, Vec::new()), &options(2.0));

        assert_relative_eq!(times[2], 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(times[3], 1.1, epsilon = TOLERANCE);
    }

    #[test]
    fn off_grid_event_gets_its_own_frame_time() {
        let trace = span_trace(0.0, 1.0, vec![TraceEvent::new("impact", 0.3)]);
        let times = frame_times(&trace, &options(2.0));

        assert!(times.iter().any(|&t| (t - 0.3).abs() < TOLERANCE));
        assert_eq!(times.len(), 4);
    }

    #[test]
    fn near_grid_event_is_already_covered() {
        // 0.51 is within a quarter interval of the 0.5 grid time.
        let trace = span_trace(0.0, 1.0, vec![TraceEvent::new("impact", 0.51)]);
        let times = frame_times(&trace, &options(2.0));

        assert_eq!(times.len(), 3);
    }

    #[test]
    fn alignment_can_be_disabled() {
        let trace = span_trace(0.0, 1.0, vec![TraceEvent::new("impact", 0.3)]);
        let mut opts = options(2.0);
        opts.event_alignment = false;

        assert_eq!(frame_times(&trace, &opts).len(), 3);
    }

    #[test]
    fn events_outside_the_span_are_ignored() {
        let trace = span_trace(
            0.0,
            1.0,
            vec![TraceEvent::new("before", -0.4), TraceEvent::new("after", 1.7)],
        );

        assert_eq!(frame_times(&trace, &options(2.0)).len(), 3);
    }

    #[test]
    fn duplicate_times_collapse() {
        let trace = span_trace(
            0.0,
            1.0,
            vec![
                TraceEvent::new("first", 0.3),
                TraceEvent::new("echo", 0.3 + 1e-9),
            ],
        );
        let times = frame_times(&trace, &options(2.0));

        assert_eq!(times.len(), 4);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn nearest_distance_checks_both_neighbors() {
        let grid = [0.0, 0.5, 1.0];

        assert_relative_eq!(nearest_distance(&grid, 0.4), 0.1, epsilon = TOLERANCE);
        assert_relative_eq!(nearest_distance(&grid, 0.6), 0.1, epsilon = TOLERANCE);
        assert_relative_eq!(nearest_distance(&grid, -0.2), 0.2, epsilon = TOLERANCE);
        assert_relative_eq!(nearest_distance(&grid, 1.3), 0.3, epsilon = TOLERANCE);
    }
}
