//! Shared fixtures for the integration tests: a small live documentation
//! parser and a model to analyze against.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use mm_analyzer::{
    analyze_input, AnalysisContext, AnalysisError, AnalyzerConfig, ExpressionParser,
    ParseFailure, ParsedExpressions,
};
use mm_concepts::{render_parameters, NodeId, Parameter};
use mm_ir::{Expr, ExprArena, ExprId, ExprKind, Name, Span, StringInterner};
use mm_types::{Idx, Member, Pool};

/// Parser for the live documentation grammar:
///
/// ```text
/// block     = { statement [";"] }
/// statement = expr
/// expr      = call { "." call | "[" ident "]" }
/// call      = ident "(" [ expr { "," expr } ] ")"
/// ```
pub struct LiveDocParser;

impl ExpressionParser for LiveDocParser {
    fn parse(
        &self,
        source: &str,
        interner: &StringInterner,
    ) -> Result<ParsedExpressions, ParseFailure> {
        let mut parser = Parser {
            src: source.as_bytes(),
            pos: 0,
            arena: ExprArena::with_capacity(source.len()),
            interner,
        };
        let mut roots = Vec::new();
        loop {
            parser.skip(|c| c.is_ascii_whitespace() || c == b';');
            if parser.pos == parser.src.len() {
                break;
            }
            roots.push(parser.expr()?);
        }
        Ok(ParsedExpressions::new(parser.arena, roots))
    }
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
    arena: ExprArena,
    interner: &'a StringInterner,
}

impl Parser<'_> {
    fn skip(&mut self, pred: impl Fn(u8) -> bool) {
        while self.src.get(self.pos).is_some_and(|&c| pred(c)) {
            self.pos += 1;
        }
    }

    fn span(&self, start: usize) -> Span {
        Span::new(start as u32, self.pos as u32)
    }

    fn error(&self, message: &str) -> ParseFailure {
        ParseFailure::new(message, self.span(self.pos))
    }

    fn eat(&mut self, c: u8) -> bool {
        self.skip(|c| c.is_ascii_whitespace());
        if self.src.get(self.pos) == Some(&c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: u8) -> Result<(), ParseFailure> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(&format!("expected `{}`", c as char)))
        }
    }

    fn ident(&mut self) -> Result<Name, ParseFailure> {
        self.skip(|c| c.is_ascii_whitespace());
        let start = self.pos;
        self.skip(|c| c.is_ascii_alphanumeric() || c == b'_');
        if start == self.pos {
            return Err(self.error("expected an identifier"));
        }
        let text = std::str::from_utf8(&self.src[start..self.pos]).unwrap();
        Ok(self.interner.intern_name(text))
    }

    fn alloc(&mut self, kind: ExprKind, start: usize) -> ExprId {
        let span = self.span(start);
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    fn call(&mut self, target: Option<ExprId>, start: usize) -> Result<ExprId, ParseFailure> {
        let method = self.ident()?;
        self.expect(b'(')?;
        let mut args = Vec::new();
        if !self.eat(b')') {
            loop {
                args.push(self.expr()?);
                if self.eat(b',') {
                    continue;
                }
                self.expect(b')')?;
                break;
            }
        }
        let args = self.arena.alloc_expr_list(args);
        Ok(self.alloc(
            ExprKind::Method {
                target,
                method,
                args,
            },
            start,
        ))
    }

    fn expr(&mut self) -> Result<ExprId, ParseFailure> {
        self.skip(|c| c.is_ascii_whitespace());
        let start = self.pos;
        let mut expr = self.call(None, start)?;
        loop {
            if self.eat(b'.') {
                expr = self.call(Some(expr), start)?;
            } else if self.eat(b'[') {
                self.skip(|c| c.is_ascii_whitespace());
                let index_start = self.pos;
                let field = self.ident()?;
                let index = self.alloc(ExprKind::Field { field }, index_start);
                self.expect(b']')?;
                expr = self.alloc(ExprKind::Array { array: expr, index }, start);
            } else {
                return Ok(expr);
            }
        }
    }
}

/// ```text
/// version      { major: integer, minor: integer }
/// cluster      { name: string, description: string, version: version }
/// host         { address: string, id: string, name: string, port: integer, cluster: cluster }
/// disk         { id: string, name: string, format: string, size: integer }
/// vm           { name: string, cluster: cluster, disks: disk[], tags: string[] }
/// fence_type   enum { manual, power }
/// ```
pub struct Model {
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

impl Model {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let mut pool = Pool::new();
        let n = |s: &str| interner.intern_name(s);
        let members = |list: &[(&str, Idx)]| -> Vec<Member> {
            list.iter().map(|&(s, ty)| Member::new(n(s), ty)).collect()
        };

        let version = pool
            .struct_type(
                n("Version"),
                members(&[("major", Idx::INTEGER), ("minor", Idx::INTEGER)]),
            )
            .unwrap();
        let cluster = pool
            .struct_type(
                n("Cluster"),
                members(&[
                    ("name", Idx::STRING),
                    ("description", Idx::STRING),
                    ("version", version),
                ]),
            )
            .unwrap();
        let host = pool
            .struct_type(
                n("Host"),
                members(&[
                    ("address", Idx::STRING),
                    ("id", Idx::STRING),
                    ("name", Idx::STRING),
                    ("port", Idx::INTEGER),
                    ("cluster", cluster),
                ]),
            )
            .unwrap();
        let disk = pool
            .struct_type(
                n("Disk"),
                members(&[
                    ("id", Idx::STRING),
                    ("name", Idx::STRING),
                    ("format", Idx::STRING),
                    ("size", Idx::INTEGER),
                ]),
            )
            .unwrap();
        let disks = pool.list(disk);
        let tags = pool.list(Idx::STRING);
        let vm = pool
            .struct_type(
                n("Vm"),
                members(&[
                    ("name", Idx::STRING),
                    ("cluster", cluster),
                    ("disks", disks),
                    ("tags", tags),
                ]),
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

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern_name(text)
    }

    /// `cluster`, `host`, `vm`, `disks` and `fence_type`.
    pub fn params(&self) -> Vec<Parameter> {
        vec![
            Parameter::new(self.name("cluster"), self.cluster),
            Parameter::new(self.name("host"), self.host),
            Parameter::new(self.name("vm"), self.vm),
            Parameter::new(self.name("disks"), self.disks),
            Parameter::new(self.name("fenceType"), self.fence_type),
        ]
    }

    pub fn ctx(&self) -> AnalysisContext<'_> {
        AnalysisContext::new(&self.pool, &self.interner, &LiveDocParser)
    }

    pub fn analyze(&self, source: &str, params: &mut [Parameter]) -> Result<(), AnalysisError> {
        analyze_input(source, params, &self.ctx())
    }

    pub fn analyze_strict(
        &self,
        source: &str,
        params: &mut [Parameter],
    ) -> Result<(), AnalysisError> {
        analyze_input(
            source,
            params,
            &self.ctx().with_config(AnalyzerConfig::strict()),
        )
    }

    pub fn render(&self, params: &[Parameter]) -> String {
        render_parameters(params, &self.pool, &self.interner)
    }

    /// Attached node at `path` below `parameter`.
    pub fn node(&self, parameter: &Parameter, path: &[&str]) -> NodeId {
        let names: Vec<Name> = path.iter().map(|s| self.name(s)).collect();
        parameter
            .forest()
            .find(&names)
            .unwrap_or_else(|| panic!("no node at {path:?}"))
    }
}
