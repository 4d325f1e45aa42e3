use super::*;

#[test]
fn test_empty_context_has_no_name() {
    let ctx = NamingContext::new();
    assert_eq!(ctx.current_name(), Err(AnnotationError::EmptyContext));
    assert_eq!(ctx.current_symbol(), None);
    assert!(ctx.is_empty());
}

#[test]
fn test_leave_on_empty_context_fails() {
    let mut ctx = NamingContext::new();
    assert_eq!(ctx.leave(), Err(AnnotationError::EmptyContext));
    assert_eq!(ctx.stats().left, 0);
}

#[test]
fn test_member_frame_keeps_enclosing_symbol() {
    let mut ctx = NamingContext::new();
    ctx.enter(None, Arc::from("a/b"));
    assert_eq!(ctx.current_symbol(), None);

    ctx.enter(Some(SymbolId(3)), Arc::from("a/b/Outer"));
    ctx.enter_member(Arc::from("a/b/Outer$run"));
    assert_eq!(ctx.current_symbol(), Some(SymbolId(3)));
    assert_eq!(ctx.current_name().map(|n| &**n), Ok("a/b/Outer$run"));
    assert_eq!(ctx.depth(), 3);

    ctx.leave().unwrap();
    ctx.leave().unwrap();
    assert_eq!(ctx.current_name().map(|n| &**n), Ok("a/b"));
    ctx.leave().unwrap();
    assert!(ctx.is_empty());
    assert_eq!(ctx.stats(), FrameStats { entered: 3, left: 3 });
}
