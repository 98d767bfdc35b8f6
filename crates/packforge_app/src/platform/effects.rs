//! Executes core effects: job starts, posted messages, console prompts.

use std::path::PathBuf;
use std::sync::Arc;

use pack_logging::{pack_debug, pack_error};
use packforge_core::{Effect, MessageChannel};
use packforge_engine::{
    BuildSettings, JobDescriptor, JobMonitor, JobNotice, ManifestPackageGenerator,
    PackageGenerator,
};

use super::ui::render;

pub struct EffectRunner {
    monitor: JobMonitor,
    channel: MessageChannel,
    generator: Arc<dyn PackageGenerator>,
    settings: BuildSettings,
}

impl EffectRunner {
    pub fn new(settings: BuildSettings, channel: MessageChannel) -> Self {
        Self {
            monitor: JobMonitor::new(),
            channel,
            generator: Arc::new(ManifestPackageGenerator),
            settings,
        }
    }

    pub fn job_running(&self) -> bool {
        self.monitor.is_running()
    }

    pub fn poll(&mut self) -> Option<JobNotice> {
        self.monitor.poll()
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Alert { text } => render::alert(&text),
                Effect::Focus { control } => render::focus(control),
                // The question itself is rendered from the session state.
                Effect::AskConfirm { question } => {
                    pack_debug!("confirmation pending: {question}");
                }
                Effect::Post { message } => self.channel.send(message),
                Effect::Download { file } => {
                    render::download(&self.settings.output_dir.join(file));
                }
                Effect::StartJob {
                    category,
                    name,
                    source_file,
                    result_file,
                } => self.start_job(category, name, source_file, result_file),
            }
        }
    }

    fn start_job(
        &mut self,
        category: String,
        name: String,
        source_file: String,
        result_file: String,
    ) {
        let source = PathBuf::from(source_file);
        let target = self.settings.output_dir.join(result_file);
        let generator = Arc::clone(&self.generator);
        let work = Box::new(move || generator.generate(&source, &target));
        let descriptor = JobDescriptor::new(category, name, work);
        // Unreachable through the UI: navigation is disabled while a job
        // runs.
        if let Err(err) = self.monitor.start(descriptor, self.channel.clone()) {
            pack_error!("refused to start job: {err}");
        }
    }
}
