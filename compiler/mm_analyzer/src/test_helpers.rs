//! Shared fixtures for analyzer tests. Only compiled in test builds.
//!
//! The model:
//!
//! ```text
//! version      { major: integer, minor: integer }
//! cluster      { name: string, description: string, version: version }
//! host         { address: string, id: string, name: string, cluster: cluster }
//! disk         { id: string, format: string, size: integer }
//! vm           { name: string, cluster: cluster, disks: disk[], tags: string[] }
//! fence_type   enum { manual, power }
//! ```

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mm_concepts::{NodeId, Parameter};
use mm_ir::{ExprArena, ExprBuilder, ExprId, Name, StringInterner};
use mm_types::{Idx, Member, Pool};

use crate::{
    analyze_expressions, AnalysisContext, AnalysisError, AnalyzerConfig, ParseFailure,
    ParsedExpressions,
};

pub(crate) struct Model {
    pub interner: StringInterner,
    pub pool: Pool,
    pub version: Idx,
    pub cluster: Idx,
    pub host: Idx,
    pub disk: Idx,
    pub disks: Idx,
    pub vm: Idx,
    pub fence_type: Idx,
}

pub(crate) fn model() -> Model {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let n = |s: &str| interner.intern_name(s);
    let member = |s: &str, ty: Idx| Member::new(interner.intern_name(s), ty);

    let version = pool
        .struct_type(
            n("Version"),
            vec![member("major", Idx::INTEGER), member("minor", Idx::INTEGER)],
        )
        .unwrap();
    let cluster = pool
        .struct_type(
            n("Cluster"),
            vec![
                member("name", Idx::STRING),
                member("description", Idx::STRING),
                member("version", version),
            ],
        )
        .unwrap();
    let host = pool
        .struct_type(
            n("Host"),
            vec![
                member("address", Idx::STRING),
                member("id", Idx::STRING),
                member("name", Idx::STRING),
                member("cluster", cluster),
            ],
        )
        .unwrap();
    let disk = pool
        .struct_type(
            n("Disk"),
            vec![
                member("id", Idx::STRING),
                member("format", Idx::STRING),
                member("size", Idx::INTEGER),
            ],
        )
        .unwrap();
    let disks = pool.list(disk);
    let tags = pool.list(Idx::STRING);
    let vm = pool
        .struct_type(
            n("Vm"),
            vec![
                member("name", Idx::STRING),
                member("cluster", cluster),
                member("disks", disks),
                member("tags", tags),
            ],
        )
        .unwrap();
    let fence_type = pool
        .enum_type(n("FenceType"), vec![n("manual"), n("power")])
        .unwrap();

    Model {
        interner,
        pool,
        version,
        cluster,
        host,
        disk,
        disks,
        vm,
        fence_type,
    }
}

/// Parser for contexts whose tests hand in expressions directly.
fn unparsed(_: &str, _: &StringInterner) -> Result<ParsedExpressions, ParseFailure> {
    Err(ParseFailure::new("no parser in unit tests", mm_ir::Span::DUMMY))
}

impl Model {
    pub fn name(&self, text: &str) -> Name {
        self.interner.intern_name(text)
    }

    pub fn param(&self, name: &str, ty: Idx) -> Parameter {
        Parameter::new(self.name(name), ty)
    }

    /// `cluster`, `host`, `vm`, `disks` and `fence_type` parameters.
    pub fn params(&self) -> Vec<Parameter> {
        vec![
            self.param("cluster", self.cluster),
            self.param("host", self.host),
            self.param("vm", self.vm),
            self.param("disks", self.disks),
            self.param("fenceType", self.fence_type),
        ]
    }

    pub fn parse(
        &self,
        build: impl FnOnce(&mut ExprBuilder<'_>) -> Vec<ExprId>,
    ) -> ParsedExpressions {
        let mut arena = ExprArena::new();
        let roots = build(&mut ExprBuilder::new(&mut arena, &self.interner));
        ParsedExpressions::new(arena, roots)
    }

    pub fn analyze(
        &self,
        parameters: &mut [Parameter],
        build: impl FnOnce(&mut ExprBuilder<'_>) -> Vec<ExprId>,
    ) -> Result<(), AnalysisError> {
        self.analyze_with(AnalyzerConfig::default(), parameters, build)
    }

    pub fn analyze_with(
        &self,
        config: AnalyzerConfig,
        parameters: &mut [Parameter],
        build: impl FnOnce(&mut ExprBuilder<'_>) -> Vec<ExprId>,
    ) -> Result<(), AnalysisError> {
        let parsed = self.parse(build);
        let ctx = AnalysisContext::new(&self.pool, &self.interner, &unparsed).with_config(config);
        analyze_expressions(&parsed, parameters, &ctx)
    }

    /// Attached node at `path` below `parameter`.
    ///
    /// # Panics
    /// Panics if there is no such node.
    pub fn node(&self, parameter: &Parameter, path: &[&str]) -> NodeId {
        let names: Vec<Name> = path.iter().map(|s| self.name(s)).collect();
        parameter
            .forest()
            .find(&names)
            .unwrap_or_else(|| panic!("no node at {path:?}"))
    }
}
