use crate::partition::Sector;
use crate::radar::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    EntrySelect,
    SectorSelect,
    EntryHover,
    EntryHoverOut,
}

impl EventKind {
    pub fn all() -> &'static [EventKind] {
        &[
            EventKind::EntrySelect,
            EventKind::SectorSelect,
            EventKind::EntryHover,
            EventKind::EntryHoverOut,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::EntrySelect => "entrySelect",
            EventKind::SectorSelect => "sectorSelect",
            EventKind::EntryHover => "entryHover",
            EventKind::EntryHoverOut => "entryHoverOut",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Notification payloads. Selections may be cleared, hence the `Option`s.
#[derive(Debug, Clone, Copy)]
pub enum RadarEvent<'a> {
    EntrySelect(Option<&'a Entry>),
    SectorSelect(Option<&'a Sector>),
    EntryHover(&'a Entry),
    EntryHoverOut(&'a Entry),
}

impl RadarEvent<'_> {
    pub fn kind(&self) -> EventKind {
        match self {
            RadarEvent::EntrySelect(_) => EventKind::EntrySelect,
            RadarEvent::SectorSelect(_) => EventKind::SectorSelect,
            RadarEvent::EntryHover(_) => EventKind::EntryHover,
            RadarEvent::EntryHoverOut(_) => EventKind::EntryHoverOut,
        }
    }
}

pub type Listener = Box<dyn FnMut(&RadarEvent<'_>)>;

/// Callbacks per event kind, called in registration order.
#[derive(Default)]
pub struct Listeners {
    slots: [Vec<Listener>; 4],
}

impl Listeners {
    pub fn add(&mut self, kind: EventKind, listener: impl FnMut(&RadarEvent<'_>) + 'static) {
        self.slots[kind.index()].push(Box::new(listener));
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.slots[kind.index()].len()
    }

    pub fn dispatch(&mut self, event: &RadarEvent<'_>) {
        for listener in &mut self.slots[event.kind().index()] {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::all() {
            map.entry(&kind.name(), &self.count(*kind));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dispatch_only_reaches_matching_kind_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            listeners.add(EventKind::SectorSelect, move |event| {
                log.borrow_mut().push((tag, event.kind()));
            });
        }
        let other = Rc::clone(&log);
        listeners.add(EventKind::EntryHover, move |_| {
            other.borrow_mut().push(("hover", EventKind::EntryHover));
        });

        listeners.dispatch(&RadarEvent::SectorSelect(None));

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", EventKind::SectorSelect),
                ("second", EventKind::SectorSelect)
            ]
        );
        assert_eq!(listeners.count(EventKind::SectorSelect), 2);
        assert_eq!(listeners.count(EventKind::EntrySelect), 0);
    }

    #[test]
    fn names_match_event_identifiers() {
        let names: Vec<_> = EventKind::all().iter().map(|k| k.name()).collect();
        assert_eq!(names, ["entrySelect", "sectorSelect", "entryHover", "entryHoverOut"]);
    }
}
