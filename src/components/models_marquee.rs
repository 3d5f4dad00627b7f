//! Webview host for the models marquee.
//!
//! The controller lives behind an `Rc<RefCell<..>>` and is only ever touched
//! from one pump task. Frames, image events, measurements and page events
//! are all queued on the same channel, so no handler re-enters it.

use dioxus::prelude::*;
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::constants::*;
use crate::core::marquee::{
    BuildCycle, FrameHandle, FrameScheduler, ImageReadiness, Listener, ListenerKind,
    ListenerRegistry, MarqueeController, MarqueeInput, SegmentCard, TrackSurface,
};
use crate::state::DisplayItem;

enum PumpCommand {
    Mount(Vec<DisplayItem>),
    Input(MarqueeInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PageEnvKind {
    Init,
    Resize,
    Visibility,
}

#[derive(Debug, Clone, Deserialize)]
struct PageEnvMessage {
    kind: PageEnvKind,
    width: f64,
    hidden: bool,
}

#[derive(Default)]
struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

/// Display refresh signal emulated with a ~60 Hz timer.
#[derive(Clone)]
struct FrameClock {
    queue: Rc<RefCell<FrameQueue>>,
    origin: Instant,
}

impl FrameClock {
    fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(FrameQueue::default())),
            origin: Instant::now(),
        }
    }

    fn drain(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.queue.borrow_mut().pending)
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let handle = FrameHandle(queue.next_id);
        queue.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.borrow_mut().pending.retain(|pending| *pending != handle);
    }

    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// What the track currently renders.
#[derive(Clone, Debug, Default, PartialEq)]
struct TrackView {
    cycle: BuildCycle,
    cards: Vec<SegmentCard>,
    segments: usize,
    ltr: bool,
}

#[derive(Clone)]
struct WebviewTrackSurface {
    view: Signal<TrackView>,
    offset: Signal<f64>,
    mounted: Rc<Cell<bool>>,
    viewport_width: Rc<Cell<f64>>,
    segment_node: Rc<RefCell<Option<Rc<MountedData>>>>,
    readiness: Rc<RefCell<ImageReadiness>>,
    registry: ListenerRegistry,
    inbox: UnboundedSender<PumpCommand>,
}

impl WebviewTrackSurface {
    /// Queue an input unless it needs a listener that is not attached.
    fn deliver(&self, input: MarqueeInput) {
        let attached = input
            .listener_kind()
            .map(|kind| self.registry.is_active(kind))
            .unwrap_or(true);
        if attached {
            let _ = self.inbox.send(PumpCommand::Input(input));
        }
    }

    fn image_terminal(&self, cycle: BuildCycle, index: usize) {
        let settled = self.readiness.borrow_mut().mark_terminal(cycle, index);
        if settled {
            self.deliver(MarqueeInput::ImagesSettled { cycle });
        }
    }

    // Writes are skipped once the component is gone.
    fn update_view(&mut self, update: impl FnOnce(&mut TrackView)) {
        if let Ok(mut view) = self.view.try_write() {
            update(&mut view);
        }
    }
}

impl TrackSurface for WebviewTrackSurface {
    fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }

    fn force_ltr(&mut self) {
        self.update_view(|view| view.ltr = true);
    }

    fn clear(&mut self) {
        self.segment_node.borrow_mut().take();
        self.update_view(|view| {
            view.segments = 0;
            view.cards.clear();
        });
    }

    fn render_segment(&mut self, cycle: BuildCycle, cards: &[SegmentCard]) {
        self.readiness.borrow_mut().reset(cycle, cards.len());
        self.update_view(|view| {
            view.cycle = cycle;
            view.cards = cards.to_vec();
            view.segments = 1;
        });
    }

    fn watch_images(&mut self, cycle: BuildCycle) {
        let settled = self.readiness.borrow_mut().watch(cycle);
        if settled {
            self.deliver(MarqueeInput::ImagesSettled { cycle });
        }
    }

    fn measure_segment(&mut self, cycle: BuildCycle) {
        let node = self.segment_node.borrow().clone();
        let inbox = self.inbox.clone();
        spawn(async move {
            let width = match node {
                Some(node) => match node.get_client_rect().await {
                    Ok(rect) => rect.size.width,
                    Err(err) => {
                        log::warn!("marquee: measuring segment failed: {:?}", err);
                        0.0
                    }
                },
                None => 0.0,
            };
            let _ = inbox.send(PumpCommand::Input(MarqueeInput::SegmentMeasured { cycle, width }));
        });
    }

    fn append_clone(&mut self, _cycle: BuildCycle) {
        self.update_view(|view| view.segments = 2);
    }

    fn apply_offset(&mut self, offset: f64) {
        if let Ok(mut current) = self.offset.try_write() {
            *current = offset;
        }
    }

    fn listen(&mut self, kind: ListenerKind) -> Listener {
        log::debug!("marquee: listening for {:?} on {:?}", kind, kind.target());
        self.registry.register(kind)
    }
}

type Controller = MarqueeController<FrameClock, WebviewTrackSurface>;

#[component]
pub fn ModelsMarquee(
    title: String,
    items: Vec<DisplayItem>,
    // Bumped by the page whenever it re-renders its sections.
    epoch: u32,
) -> Element {
    let (inbox, receiver) = use_hook(|| {
        let (tx, rx) = unbounded_channel::<PumpCommand>();
        (tx, Rc::new(RefCell::new(Some::<UnboundedReceiver<PumpCommand>>(rx))))
    });
    let view = use_signal(TrackView::default);
    let offset = use_signal(|| 0.0_f64);
    let clock = use_hook(FrameClock::new);
    let surface = use_hook(|| WebviewTrackSurface {
        view,
        offset,
        mounted: Rc::new(Cell::new(false)),
        viewport_width: Rc::new(Cell::new(MARQUEE_DEFAULT_VIEWPORT_WIDTH)),
        segment_node: Rc::new(RefCell::new(None)),
        readiness: Rc::new(RefCell::new(ImageReadiness::default())),
        registry: ListenerRegistry::default(),
        inbox: inbox.clone(),
    });
    let controller: Rc<RefCell<Controller>> =
        use_hook(|| Rc::new(RefCell::new(MarqueeController::new(clock.clone(), surface.clone()))));
    let latest = use_hook(|| Rc::new(RefCell::new((items.clone(), epoch))));

    // Re-initialize whenever the items or the page epoch change.
    let changed = {
        let mut latest = latest.borrow_mut();
        if latest.0 != items || latest.1 != epoch {
            *latest = (items.clone(), epoch);
            true
        } else {
            false
        }
    };
    if changed {
        let _ = inbox.send(PumpCommand::Mount(items.clone()));
    }

    use_future({
        let controller = controller.clone();
        let receiver = receiver.clone();
        move || {
            let controller = controller.clone();
            let receiver = receiver.borrow_mut().take();
            async move {
                let Some(mut receiver) = receiver else {
                    return;
                };
                while let Some(command) = receiver.recv().await {
                    let mut controller = controller.borrow_mut();
                    match command {
                        PumpCommand::Mount(items) => {
                            controller.mount(items);
                            log::trace!(
                                "marquee: {:?} in {:?}, {} listeners, ticking: {}",
                                controller.cycle(),
                                controller.phase(),
                                controller.listener_count(),
                                controller.is_ticking()
                            );
                        }
                        PumpCommand::Input(input) => controller.handle(input),
                    }
                }
            }
        }
    });

    use_future({
        let clock = clock.clone();
        let inbox = inbox.clone();
        move || {
            let clock = clock.clone();
            let inbox = inbox.clone();
            async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(MARQUEE_FRAME_INTERVAL_MS)).await;
                    let now_ms = clock.now_ms();
                    for handle in clock.drain() {
                        let _ = inbox.send(PumpCommand::Input(MarqueeInput::Frame { handle, now_ms }));
                    }
                }
            }
        }
    });

    use_future({
        let surface = surface.clone();
        let latest = latest.clone();
        move || {
            let surface = surface.clone();
            let latest = latest.clone();
            async move {
                let mut eval = document::eval(MARQUEE_PAGE_ENV_SCRIPT);
                loop {
                    match eval.recv::<PageEnvMessage>().await {
                        Ok(message) => {
                            surface.viewport_width.set(message.width.max(0.0));
                            match message.kind {
                                // Speed is classified at mount, so remount once the real width is known.
                                PageEnvKind::Init => {
                                    let items = latest.borrow().0.clone();
                                    let _ = surface.inbox.send(PumpCommand::Mount(items));
                                    // Queued behind the mount, so the fresh listeners see it.
                                    let _ = surface.inbox.send(PumpCommand::Input(
                                        MarqueeInput::VisibilityChanged {
                                            hidden: message.hidden,
                                        },
                                    ));
                                }
                                PageEnvKind::Resize => surface.deliver(MarqueeInput::Resize),
                                PageEnvKind::Visibility => {
                                    surface.deliver(MarqueeInput::VisibilityChanged {
                                        hidden: message.hidden,
                                    })
                                }
                            }
                        }
                        Err(err) => {
                            log::warn!("marquee: page bridge closed: {:?}", err);
                            break;
                        }
                    }
                }
            }
        }
    });

    use_drop({
        let controller = controller.clone();
        move || {
            if let Ok(mut controller) = controller.try_borrow_mut() {
                controller.teardown();
            }
        }
    });

    let current = view.read().clone();
    let offset_px = offset();
    let direction = if current.ltr { "ltr" } else { "inherit" };

    let on_viewport_mounted = {
        let surface = surface.clone();
        let latest = latest.clone();
        move |_: MountedEvent| {
            surface.mounted.set(true);
            let items = latest.borrow().0.clone();
            let _ = surface.inbox.send(PumpCommand::Mount(items));
        }
    };
    let on_enter = {
        let surface = surface.clone();
        move |_: MouseEvent| surface.deliver(MarqueeInput::PointerEnter)
    };
    let on_leave = {
        let surface = surface.clone();
        move |_: MouseEvent| surface.deliver(MarqueeInput::PointerLeave)
    };
    let on_touch_start = {
        let surface = surface.clone();
        move |_: TouchEvent| surface.deliver(MarqueeInput::TouchStart)
    };
    let on_touch_end = {
        let surface = surface.clone();
        move |_: TouchEvent| surface.deliver(MarqueeInput::TouchEnd)
    };

    let segments = (0..current.segments).map(|segment| {
        let cycle = current.cycle;
        let segment_key = format!("{}-{}", cycle.0, segment);
        let node_slot = surface.segment_node.clone();
        let cards = current.cards.iter().enumerate().map(|(index, card)| {
            let on_load = surface.clone();
            let on_error = surface.clone();
            let counted = segment == 0;
            rsx! {
                div {
                    key: "{index}",
                    class: "slide",
                    style: "flex: 0 0 auto; width: 220px; border-radius: 14px; overflow: hidden; background-color: {BG_ELEVATED}; border: 1px solid {BORDER_SUBTLE};",
                    img {
                        src: "{card.image}",
                        alt: "{card.alt}",
                        draggable: "false",
                        style: "display: block; width: 220px; height: 280px; object-fit: cover;",
                        onload: move |_| {
                            if counted {
                                on_load.image_terminal(cycle, index);
                            }
                        },
                        onerror: move |_| {
                            if counted {
                                on_error.image_terminal(cycle, index);
                            }
                        },
                    }
                    div {
                        class: "caption",
                        style: "padding: 10px 12px; font-size: 14px; color: {TEXT_SECONDARY}; text-align: center; min-height: 20px;",
                        "{card.caption}"
                    }
                }
            }
        });
        rsx! {
            div {
                key: "{segment_key}",
                style: "display: flex; gap: {MARQUEE_CARD_GAP_PX}px; padding-right: {MARQUEE_CARD_GAP_PX}px; flex: 0 0 auto;",
                onmounted: move |evt: MountedEvent| {
                    if segment == 0 {
                        *node_slot.borrow_mut() = Some(evt.data());
                    }
                },
                {cards}
            }
        }
    });

    rsx! {
        section {
            id: "models",
            style: "padding: 56px 0; background-color: {BG_DEEPEST};",
            h2 {
                style: "margin: 0 0 24px; padding: 0 24px; font-size: 28px; color: {TEXT_PRIMARY}; text-align: center;",
                "{title}"
            }
            div {
                class: "carousel",
                style: "position: relative; width: 100%; overflow: hidden; direction: {direction};",
                onmounted: on_viewport_mounted,
                div {
                    id: "cartrack",
                    style: "display: flex; width: max-content; direction: {direction}; transform: translateX(-{offset_px}px); will-change: transform;",
                    onmouseenter: on_enter,
                    onmouseleave: on_leave,
                    ontouchstart: on_touch_start,
                    ontouchend: on_touch_end,
                    {segments}
                }
            }
        }
    }
}
