/// Print a compact command reference.
pub fn run() {
    print!(
        r#"shapeset — entity selection inspector

COMMANDS:
  shapeset entities                                List entities, root types, levels, field counts
  shapeset resolve <ENTITY> [--level L]            Resolved selection (L = full|list|nav, default full)
    [--omit a,b]                                   Leave out top-level fields
  shapeset query <ENTITY> --name OP                Single-item query descriptor
    [--input TYPE] [--level L]
  shapeset search <ENTITY> --name OP --input TYPE  Find-many descriptors (list, nav, full)
    [--level L]                                    Only the descriptor for one level
  shapeset mutation --name OP [--input TYPE]       Mutation descriptor
    [--entity ENTITY] [--level L]                  Payload; omit for mutations returning nothing
  shapeset check                                   Validate and resolve every entity at every level
  shapeset usage                                   This reference

GLOBAL OPTIONS:
  --format human|json                              Default: human on a terminal, json when piped
  -v, --verbose                                    Log resolution steps to stderr ($RUST_LOG wins)
  --no-cycle-check                                 Recurse until --max-depth instead of reporting cycles
  --max-depth N                                    Maximum reference nesting (default 64)
  --no-memo                                        Resolve without memoizing
"#
    );
}
