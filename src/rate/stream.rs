/// The four cumulative counters exposed per endpoint by the health API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterKind {
    Heartbeats,
    Errors,
    Warnings,
    MessagesProcessed,
}

impl CounterKind {
    /// Emission order is fixed so a cycle always reports metrics in the
    /// same sequence for the same input.
    pub const ALL: [CounterKind; 4] = [
        CounterKind::Heartbeats,
        CounterKind::Errors,
        CounterKind::Warnings,
        CounterKind::MessagesProcessed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Heartbeats => "Heartbeats",
            Self::Errors => "Errors",
            Self::Warnings => "Warnings",
            Self::MessagesProcessed => "MessagesProcessed",
        }
    }
}

/// Identity of one rate series: either the cross-endpoint aggregate for a
/// counter kind, or a single endpoint's counter. Equality is structural, so
/// the same endpoint name always maps back to the same series.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StreamKey {
    Summary(CounterKind),
    Endpoint { name: String, kind: CounterKind },
}

impl StreamKey {
    pub fn summary(kind: CounterKind) -> Self {
        Self::Summary(kind)
    }

    pub fn endpoint(name: &str, kind: CounterKind) -> Self {
        Self::Endpoint {
            name: name.to_string(),
            kind,
        }
    }
}
