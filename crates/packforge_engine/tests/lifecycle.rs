//! End-to-end wizard lifecycle: state machine, channel, monitor, and the
//! default generator wired together the way the platform wires them.

use std::fs;
use std::path::PathBuf;
use std::sync::Once;
use std::thread;
use std::time::Duration;

use packforge_core::{
    keys, names, update, Effect, Message, MessageChannel, Page, WizardSession,
};
use packforge_engine::{
    BuildSettings, DirArtifactStore, JobDescriptor, JobMonitor, JobNotice,
    ManifestPackageGenerator, PackageGenerator,
};
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pack_logging::initialize_for_tests);
}

const MANIFEST: &str = r#"{
    "metadata": { "package_name": "Demo", "version": "1.0" },
    "sources": [ { "name": "a.txt", "content": "hello" } ]
}"#;

struct Harness {
    session: WizardSession,
    store: DirArtifactStore,
    channel: MessageChannel,
    monitor: JobMonitor,
    settings: BuildSettings,
    alerts: Vec<String>,
    questions: Vec<String>,
    downloads: Vec<String>,
}

impl Harness {
    fn new(output_dir: PathBuf, source: &str, package_name: &str) -> Self {
        let settings = BuildSettings::with_output_dir(output_dir);
        let store = DirArtifactStore::new(&settings);
        let mut session = WizardSession::new();
        session.set_file_name(source);
        session.set_package_name(package_name);
        Self {
            session,
            store,
            channel: MessageChannel::new(),
            monitor: JobMonitor::new(),
            settings,
            alerts: Vec::new(),
            questions: Vec::new(),
            downloads: Vec::new(),
        }
    }

    fn dispatch(&mut self, message: Message) {
        let (next, effects) = update(std::mem::take(&mut self.session), &message, &self.store);
        self.session = next;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Post { message } => self.channel.send(message),
                Effect::Alert { text } => self.alerts.push(text),
                Effect::AskConfirm { question } => self.questions.push(question),
                Effect::Download { file } => self.downloads.push(file),
                Effect::Focus { .. } => {}
                Effect::StartJob {
                    category,
                    name,
                    source_file,
                    result_file,
                } => {
                    let source = PathBuf::from(source_file);
                    let target = self.settings.output_dir.join(result_file);
                    let work =
                        Box::new(move || ManifestPackageGenerator.generate(&source, &target));
                    self.monitor
                        .start(JobDescriptor::new(category, name, work), self.channel.clone())
                        .expect("start job");
                }
            }
        }
    }

    /// One round-trip's worth of dispatching: drain until the channel
    /// settles, since posted messages re-enter it.
    fn pump(&mut self) {
        loop {
            let pending = self.channel.drain();
            if pending.is_empty() {
                break;
            }
            for message in pending {
                self.dispatch(message);
            }
        }
    }

    /// Ticks round-trips until the monitor yields the terminal notice, then
    /// relays it into the channel exactly as the platform loop does.
    fn run_job_to_completion(&mut self) {
        for _ in 0..500 {
            self.pump();
            if let Some(notice) = self.monitor.poll() {
                let name = match notice {
                    JobNotice::Finished => names::JOB_FINISHED,
                    JobNotice::Disappeared => names::JOB_DISAPPEARED,
                };
                self.channel.send(Message::new(name));
                self.pump();
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("job did not terminate within five seconds");
    }
}

#[test]
fn successful_build_walks_the_wizard_through() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("project.json");
    fs::write(&source, MANIFEST).unwrap();

    let mut harness = Harness::new(
        temp.path().join("packages"),
        source.to_str().unwrap(),
        "Demo-1.0",
    );

    harness.dispatch(Message::new(names::WIZARD_NEXT));
    assert_eq!(harness.session.page(), Page::Building);

    harness.pump(); // generate -> job start
    assert_eq!(harness.session.result_file(), "Demo-1.0.zip");

    harness.run_job_to_completion();
    assert_eq!(harness.session.page(), Page::LastPage);
    assert!(harness.session.view().success_visible);

    let artifact = temp.path().join("packages").join("Demo-1.0.zip");
    let payload = fs::read_to_string(&artifact).unwrap();
    assert!(payload.contains("package: Demo"));
    assert!(payload.contains("--- a.txt"));

    harness.dispatch(Message::new(names::DOWNLOAD));
    assert_eq!(harness.downloads, vec!["Demo-1.0.zip".to_string()]);
}

#[test]
fn failing_build_shows_the_panel_and_stays_on_building() {
    init_logging();
    let temp = TempDir::new().unwrap();
    // No manifest on disk: generation will fail on the unreadable source.
    let source = temp.path().join("missing.json");

    let mut harness = Harness::new(
        temp.path().join("packages"),
        source.to_str().unwrap(),
        "Broken",
    );

    harness.dispatch(Message::new(names::WIZARD_NEXT));
    assert_eq!(harness.session.page(), Page::Building);
    harness.pump();

    harness.run_job_to_completion();

    // The failure message arrived and the terminal notice did not advance
    // the page past the panel.
    assert_eq!(harness.session.page(), Page::Building);
    let view = harness.session.view();
    let failure = view.failure_text.expect("failure panel visible");
    assert!(failure.starts_with("Package generation failed: "));
    assert!(!view.success_visible);
    assert!(!harness.monitor.is_running());
}

#[test]
fn collision_is_confirmed_then_overwritten() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("project.json");
    fs::write(&source, MANIFEST).unwrap();

    let packages = temp.path().join("packages");
    fs::create_dir_all(&packages).unwrap();
    // The guard probes the raw entered name, pre-extension.
    fs::write(packages.join("Demo-1.0"), "occupied").unwrap();

    let mut harness = Harness::new(packages.clone(), source.to_str().unwrap(), "Demo-1.0");

    harness.dispatch(Message::new(names::WIZARD_NEXT));
    assert_eq!(harness.session.page(), Page::SetName);
    assert_eq!(
        harness.questions,
        vec!["File exists. Do you wish to overwrite?".to_string()]
    );

    harness.dispatch(Message::new(names::CONFIRM_OVERWRITE).with(keys::RESULT, "yes"));
    assert_eq!(harness.session.page(), Page::Building);

    harness.pump();
    harness.run_job_to_completion();
    assert_eq!(harness.session.page(), Page::LastPage);
    assert!(packages.join("Demo-1.0.zip").is_file());
}
