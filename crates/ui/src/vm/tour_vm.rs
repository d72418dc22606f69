use services::{NarrationStatus, SlideshowService};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourSlideVm {
    pub key: u64,
    pub src: String,
    pub alt: String,
    pub caption: String,
    /// False while fading out between slides.
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUploadVm {
    pub key: u64,
    pub index: usize,
    pub src: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourVm {
    pub slide: Option<TourSlideVm>,
    pub position_label: String,
    pub can_navigate: bool,
    pub narration_enabled: bool,
    pub narration_label: String,
    pub narration_hint: Option<String>,
    pub pending: Vec<PendingUploadVm>,
    pub failures: Vec<String>,
}

#[must_use]
pub fn map_tour(tour: &SlideshowService) -> TourVm {
    let session = tour.session();
    let index = session.current_index();

    let slide = session.current_slide().map(|slide| TourSlideVm {
        key: slide.id().value(),
        src: slide.source().as_src().to_string(),
        alt: format!("Slide {}", index + 1),
        caption: slide.caption().to_string(),
        visible: !session.is_transitioning(),
    });

    let position_label = if session.is_empty() {
        "No slides".to_string()
    } else {
        format!("{} / {}", index + 1, session.len())
    };

    let narration_enabled = session.narration_enabled();
    let narration_label = if narration_enabled {
        "Pause Narration"
    } else {
        "Resume Narration"
    }
    .to_string();
    let narration_hint = match tour.narration_status() {
        NarrationStatus::Ready => None,
        NarrationStatus::Unavailable => {
            Some("Speech is not available on this device.".to_string())
        }
    };

    let pending = session
        .pending_uploads()
        .iter()
        .enumerate()
        .map(|(index, slide)| PendingUploadVm {
            key: slide.id().value(),
            index,
            src: slide.source().as_src().to_string(),
            caption: slide.caption().to_string(),
        })
        .collect();

    let failures = session
        .upload_failures()
        .iter()
        .map(|failure| format!("{}: {}", failure.file_name, failure.reason))
        .collect();

    TourVm {
        slide,
        position_label,
        can_navigate: !session.is_empty(),
        narration_enabled,
        narration_label,
        narration_hint,
        pending,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{
        DecodedUpload, Direction, NarrationError, NarrationService, Narrator, Utterance,
    };
    use std::sync::Arc;
    use woodland_core::catalog::default_slides;
    use woodland_core::model::ImageSource;

    fn tour() -> SlideshowService {
        SlideshowService::new(default_slides(), NarrationService::silent())
    }

    #[test]
    fn maps_current_slide_and_position() {
        let mut tour = tour();
        tour.navigate(Direction::Back);

        let vm = map_tour(&tour);
        let slide = vm.slide.unwrap();
        assert_eq!(slide.alt, "Slide 8");
        assert_eq!(slide.src, "/assets/tour/download-8.jpg");
        assert_eq!(slide.caption, "Peaceful stream flowing through the mossy forest.");
        assert!(slide.visible);
        assert_eq!(vm.position_label, "8 / 8");
        assert_eq!(vm.narration_label, "Pause Narration");
    }

    #[test]
    fn slide_is_hidden_mid_transition() {
        let mut tour = tour();
        let pending = tour.begin_navigation(Direction::Forward).unwrap();
        assert!(!map_tour(&tour).slide.unwrap().visible);

        tour.complete_navigation(pending);
        assert!(map_tour(&tour).slide.unwrap().visible);
    }

    #[test]
    fn maps_staged_uploads_and_failures() {
        let mut tour = tour().with_narration_enabled(false);
        let ticket = tour.begin_upload();
        tour.finish_upload(
            ticket,
            vec![
                DecodedUpload {
                    file_name: "fern.png".into(),
                    result: Ok(ImageSource::data_url("data:image/png;base64,AAAA").unwrap()),
                },
                DecodedUpload::unreadable("broken.png", "read aborted"),
            ],
        );
        tour.edit_caption(0, "Fern").unwrap();

        let vm = map_tour(&tour);
        assert_eq!(vm.narration_label, "Resume Narration");
        assert_eq!(vm.pending.len(), 1);
        assert_eq!(vm.pending[0].index, 0);
        assert_eq!(vm.pending[0].caption, "Fern");
        assert_eq!(vm.pending[0].src, "data:image/png;base64,AAAA");
        assert_eq!(vm.failures, vec!["broken.png: file could not be read: read aborted"]);
    }

    #[test]
    fn empty_tour_has_no_slide() {
        let vm = map_tour(&SlideshowService::new(Vec::new(), NarrationService::silent()));
        assert!(vm.slide.is_none());
        assert!(!vm.can_navigate);
        assert_eq!(vm.position_label, "No slides");
    }

    struct Mute;

    impl Narrator for Mute {
        fn speak(&self, _utterance: &Utterance) -> Result<(), NarrationError> {
            Err(NarrationError::Unavailable("no voices".into()))
        }

        fn cancel_all(&self) {}
    }

    #[test]
    fn unavailable_speech_shows_hint() {
        let mut tour = SlideshowService::new(default_slides(), NarrationService::new(Arc::new(Mute)));
        tour.hear_description();
        assert!(map_tour(&tour).narration_hint.is_some());
    }
}
