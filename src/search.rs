use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{bounded, Receiver};
use log::{info, warn};

use crate::expand::PairKeyBuilder;
use crate::progress;
use crate::types::*;
use crate::validate::PresenceBuffer;
use crate::MatchModel;

///How many names the jobs channel buffers ahead of the workers
const JOB_QUEUE_SIZE: usize = 1000;

///Runs the parallel match phase: fans the name stream out over workers,
///each probing the inverted index and validating candidates against its
///own presence buffer, writing accepted pairs to its own sink file. The
///sinks are concatenated into the output once the pool drains. Returns the
///number of pairs written across all workers.
pub fn find_matches(model: &MatchModel, output_path: &str, num_workers: usize) -> io::Result<u64> {
    let tempdir = tempfile::Builder::new()
        .prefix("name_match_batches")
        .tempdir()?;

    let num_workers = num_workers.max(1);
    let total = model.names.len();
    let names_processed = AtomicU64::new(0);
    let (job_tx, job_rx) = bounded::<&str>(JOB_QUEUE_SIZE);
    let (stop_tx, stop_rx) = bounded::<()>(1);

    info!("Processing {} names with {} workers", total, num_workers);

    let written = std::thread::scope(|s| {
        let monitor = s.spawn(|| progress::run_monitor(&names_processed, total, stop_rx));

        let mut workers = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            let jobs = job_rx.clone();
            let sink_path = tempdir.path().join(format!("worker_{}.txt", worker_id));
            let names_processed = &names_processed;
            workers.push(s.spawn(move || run_worker(model, jobs, &sink_path, names_processed)));
        }
        drop(job_rx);

        for name in model.names.iter() {
            if job_tx.send(name.as_str()).is_err() {
                break;
            }
        }
        drop(job_tx);

        let mut written = 0u64;
        for worker in workers {
            written += worker.join().expect("worker thread panicked");
        }
        stop_tx.send(()).ok();
        monitor.join().expect("monitor thread panicked");
        written
    });

    //overwrite the last redraw with the final count
    progress::print_progress(total as u64, total);
    println!();

    info!("Merging results");
    merge_sinks(tempdir.path(), output_path)?;
    Ok(written)
}

///One worker: consumes names from the queue until it closes. All scratch
///(presence buffer, pair-key builder, seen set) is owned by the worker and
///reused across names; nothing shared is mutated besides the progress
///counter. Sink errors terminate the worker, whatever it already wrote is
///still merged.
fn run_worker(
    model: &MatchModel,
    jobs: Receiver<&str>,
    sink_path: &Path,
    names_processed: &AtomicU64,
) -> u64 {
    let file = match File::create(sink_path) {
        Ok(f) => f,
        Err(e) => {
            warn!("could not create worker sink {}: {}", sink_path.display(), e);
            return 0;
        }
    };
    let mut sink = BufWriter::new(file);

    let mut presence = PresenceBuffer::new(model.interner.len());
    let mut builder = PairKeyBuilder::new();
    //accepted pairs live here for the worker's lifetime: the same pair is
    //reachable from both of its names, and cross-worker dedup is left to
    //downstream tooling
    let mut seen: HashSet<(&str, &str), FastHash> = HashSet::with_hasher(FastHash::new());
    let mut written = 0u64;

    while let Ok(name) = jobs.recv() {
        //exactly once per name, also for the ones skipped below
        names_processed.fetch_add(1, Ordering::Relaxed);

        let parts = match model.name_words.get(name) {
            Some(parts) if parts.len() >= 2 => parts,
            _ => continue,
        };

        for key in builder.build(parts, &model.tradeouts, &model.interner) {
            let candidates = match model.pair_index.get(key) {
                Some(candidates) => candidates,
                None => continue,
            };
            for other in candidates {
                let other = other.as_str();
                if other == name {
                    continue;
                }
                let (n1, n2) = if name < other {
                    (name, other)
                } else {
                    (other, name)
                };
                if seen.contains(&(n1, n2)) {
                    continue;
                }
                //a candidate the index knows but the corpus does not has no
                //id vector and can never reach the two-token floor
                let ids1 = match model.name_words.get(n1) {
                    Some(ids) => ids,
                    None => continue,
                };
                let ids2 = match model.name_words.get(n2) {
                    Some(ids) => ids,
                    None => continue,
                };
                if presence.validate(ids1, ids2, &model.word_matches) {
                    seen.insert((n1, n2));
                    if let Err(e) = writeln!(sink, "(\"{}\", \"{}\")", n1, n2) {
                        warn!("write error on worker sink, terminating worker: {}", e);
                        return written;
                    }
                    written += 1;
                }
            }
        }
    }

    if let Err(e) = sink.flush() {
        warn!("could not flush worker sink {}: {}", sink_path.display(), e);
    }
    written
}

///Concatenate the per-worker sinks, in whatever order the directory lists
///them, into the final output file.
fn merge_sinks(dir: &Path, output_path: &str) -> io::Result<()> {
    let out = File::create(output_path)?;
    let mut writer = BufWriter::new(out);
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let mut f = File::open(entry.path())?;
        io::copy(&mut f, &mut writer)?;
    }
    writer.flush()
}
